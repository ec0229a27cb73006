// Department headcount summary served by the minimal JSON endpoint
use serde::Serialize;

/// Parallel `departments` / `counts` arrays. Built from pairs so both arrays
/// always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadcountSummary {
    departments: Vec<String>,
    counts: Vec<u32>,
}

impl HeadcountSummary {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let (departments, counts) = pairs
            .into_iter()
            .map(|(department, count)| (department.to_string(), count))
            .unzip();
        Self {
            departments,
            counts,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
