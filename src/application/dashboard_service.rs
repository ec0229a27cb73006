// Dashboard service - Use case for recomputing the dashboard on a filter change
use crate::application::projections::{
    age_tenure_scatter, department_position_heatmap, distinct, engagement_by_location,
    performance_by_gender, salary_distribution,
};
use crate::domain::dashboard::{DashboardUpdate, DataTable};
use crate::domain::employee::Dataset;
use crate::domain::filter::{self, FilterColumn, FilterInput, FilterSelection};
use serde::Serialize;
use std::sync::Arc;

/// Dropdown choices, each in order of first appearance in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub positions: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<Dataset>,
    histogram_bins: usize,
    page_size: usize,
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>, histogram_bins: usize, page_size: usize) -> Self {
        Self {
            dataset,
            histogram_bins,
            page_size,
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        let employees = self.dataset.employees();
        let column = |c: FilterColumn| distinct(employees, move |e| c.value_of(e));
        FilterOptions {
            departments: column(FilterColumn::Department),
            positions: column(FilterColumn::Position),
            locations: column(FilterColumn::Location),
        }
    }

    /// Recompute every chart and the table for the given dropdown values.
    pub fn update(
        &self,
        departments: Option<FilterInput>,
        positions: Option<FilterInput>,
        locations: Option<FilterInput>,
    ) -> anyhow::Result<DashboardUpdate> {
        let selection = FilterSelection::new()
            .with(FilterColumn::Department, departments)
            .with(FilterColumn::Position, positions)
            .with(FilterColumn::Location, locations);

        self.update_selection(&selection)
    }

    /// Filters the dataset once and derives all outputs from that one snapshot.
    /// Any projection failure fails the whole update.
    pub fn update_selection(
        &self,
        selection: &FilterSelection,
    ) -> anyhow::Result<DashboardUpdate> {
        let snapshot = filter::apply(self.dataset.employees(), selection);

        tracing::debug!(
            unconstrained = selection.is_unconstrained(),
            constraints = ?FilterColumn::ALL.map(|c| selection.accepted(c).map(|v| v.len())),
            matched = snapshot.len(),
            total = self.dataset.len(),
            "Recomputing dashboard"
        );

        let salary_distribution = salary_distribution(&snapshot, self.histogram_bins)?;
        let age_tenure_scatter = age_tenure_scatter(&snapshot);
        let department_position_heatmap = department_position_heatmap(&snapshot);
        let performance_by_gender = performance_by_gender(&snapshot);
        let engagement_by_location = engagement_by_location(&snapshot);

        let update = DashboardUpdate {
            salary_distribution,
            age_tenure_scatter,
            department_position_heatmap,
            performance_by_gender,
            engagement_by_location,
            table: DataTable::new(snapshot, self.page_size),
        };

        tracing::debug!(
            empty_charts = update.charts().iter().filter(|c| c.is_empty()).count(),
            "Dashboard recomputed"
        );
        Ok(update)
    }
}
