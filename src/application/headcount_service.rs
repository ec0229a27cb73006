// Headcount service - Use case behind the minimal JSON endpoint
use crate::domain::headcount::HeadcountSummary;
use crate::infrastructure::static_tables::department_headcounts;

/// Stateless; the summary is rebuilt on every call.
#[derive(Clone, Default)]
pub struct HeadcountService;

impl HeadcountService {
    pub fn new() -> Self {
        Self
    }

    pub fn headcounts(&self) -> HeadcountSummary {
        let summary = department_headcounts();
        tracing::debug!(total = summary.total(), "Serving department headcounts");
        summary
    }
}
