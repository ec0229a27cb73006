// Dashboard domain model
use super::chart::ChartSpec;
use super::employee::{Employee, EMPLOYEE_COLUMNS};
use serde::Serialize;

/// Everything the dashboard redraws after a filter change, all derived from
/// one filtered snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub salary_distribution: ChartSpec,
    pub age_tenure_scatter: ChartSpec,
    pub department_position_heatmap: ChartSpec,
    pub performance_by_gender: ChartSpec,
    pub engagement_by_location: ChartSpec,
    pub table: DataTable,
}

impl DashboardUpdate {
    pub fn charts(&self) -> [&ChartSpec; 5] {
        [
            &self.salary_distribution,
            &self.age_tenure_scatter,
            &self.department_position_heatmap,
            &self.performance_by_gender,
            &self.engagement_by_location,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Employee>,
    pub page_size: usize,
    pub total_rows: usize,
    pub page_count: usize,
    /// Set when `rows` holds a single page instead of every filtered row.
    pub page: Option<usize>,
}

impl DataTable {
    pub fn new(rows: Vec<Employee>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_rows = rows.len();
        Self {
            columns: EMPLOYEE_COLUMNS
                .iter()
                .map(|(id, name)| TableColumn {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            rows,
            page_size,
            total_rows,
            page_count: total_rows.div_ceil(page_size),
            page: None,
        }
    }

    /// Keep only the rows of a zero-based page. Pages past the end are empty.
    pub fn into_page(mut self, page: usize) -> Self {
        let start = page.saturating_mul(self.page_size).min(self.total_rows);
        let end = start.saturating_add(self.page_size).min(self.total_rows);
        self.rows = self.rows.drain(start..end).collect();
        self.page = Some(page);
        self
    }
}
