// Filter selection and evaluation over employee records
use super::employee::Employee;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    Department,
    Position,
    Location,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 3] = [
        FilterColumn::Department,
        FilterColumn::Position,
        FilterColumn::Location,
    ];

    pub fn value_of<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            FilterColumn::Department => &employee.department,
            FilterColumn::Position => &employee.position,
            FilterColumn::Location => &employee.location,
        }
    }
}

/// A filter value as the UI sends it: a lone value or a list of values.
///
/// Absence (`null` or a missing field) is modelled as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FilterInput {
    One(String),
    Many(Vec<String>),
}

impl FilterInput {
    /// Normalize to a set of accepted values. A lone empty string is "no
    /// selection"; list entries are kept as given, so `[""]` matches nothing.
    pub fn into_set(self) -> BTreeSet<String> {
        match self {
            FilterInput::One(value) if value.is_empty() => BTreeSet::new(),
            FilterInput::One(value) => BTreeSet::from([value]),
            FilterInput::Many(values) => values.into_iter().collect(),
        }
    }
}

impl From<&str> for FilterInput {
    fn from(value: &str) -> Self {
        FilterInput::One(value.to_string())
    }
}

impl From<Vec<&str>> for FilterInput {
    fn from(values: Vec<&str>) -> Self {
        FilterInput::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Accepted values per filterable column. A column without an entry accepts
/// every record; empty value sets are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    constraints: BTreeMap<FilterColumn, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSelection::set`].
    pub fn with(mut self, column: FilterColumn, input: Option<FilterInput>) -> Self {
        self.set(column, input);
        self
    }

    pub fn set(&mut self, column: FilterColumn, input: Option<FilterInput>) {
        let values = input.map(FilterInput::into_set).unwrap_or_default();
        if values.is_empty() {
            self.constraints.remove(&column);
        } else {
            self.constraints.insert(column, values);
        }
    }

    pub fn accepted(&self, column: FilterColumn) -> Option<&BTreeSet<String>> {
        self.constraints.get(&column)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.constraints
            .iter()
            .all(|(column, values)| values.contains(column.value_of(employee)))
    }
}

/// Keep the records accepted by every column constraint, in their original order.
pub fn apply(records: &[Employee], selection: &FilterSelection) -> Vec<Employee> {
    records
        .iter()
        .filter(|employee| selection.matches(employee))
        .cloned()
        .collect()
}
