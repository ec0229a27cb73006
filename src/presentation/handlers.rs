// HTTP request handlers
use crate::domain::filter::FilterInput;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, Response},
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("assets/index.html");

/// Filters as query parameters; multiple values are comma-separated,
/// e.g. `?department=HR,Sales&location=Tokyo&page=0`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub department: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub page: Option<usize>,
}

/// Filters as a JSON body; each field may be null, a string, or a list.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub departments: Option<FilterInput>,
    #[serde(default)]
    pub positions: Option<FilterInput>,
    #[serde(default)]
    pub locations: Option<FilterInput>,
    #[serde(default)]
    pub page: Option<usize>,
}

/// `?department=` (or only separators) means no constraint.
fn comma_list(raw: Option<String>) -> Option<FilterInput> {
    let values: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    (!values.is_empty()).then_some(FilterInput::Many(values))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page: three dropdowns, five charts, and the employee table
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Dropdown options for the three filters
pub async fn filter_options(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, ApiError> {
    let options = state.dashboard_service.filter_options();
    Ok(json_response(&options, accepts_brotli(&headers)).await?)
}

/// Recompute the dashboard from query-string filters
pub async fn dashboard_query(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, ApiError> {
    render_update(
        &state,
        DashboardRequest {
            departments: comma_list(query.department),
            positions: comma_list(query.position),
            locations: comma_list(query.location),
            page: query.page,
        },
        accepts_brotli(&headers),
    )
    .await
}

/// Recompute the dashboard from a JSON filter body
pub async fn dashboard_update(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<Response<Body>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    render_update(&state, request, accepts_brotli(&headers)).await
}

async fn render_update(
    state: &AppState,
    request: DashboardRequest,
    compress: bool,
) -> Result<Response<Body>, ApiError> {
    let mut update = state.dashboard_service.update(
        request.departments,
        request.positions,
        request.locations,
    )?;

    if let Some(page) = request.page {
        update.table = update.table.into_page(page);
    }

    Ok(json_response(&update, compress).await?)
}

/// Fixed department headcounts
pub async fn headcounts(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, ApiError> {
    let summary = state.headcount_service.headcounts();
    Ok(json_response(&summary, accepts_brotli(&headers)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_list_splits_and_trims() {
        assert_eq!(comma_list(None), None);
        assert_eq!(comma_list(Some(String::new())), None);
        assert_eq!(comma_list(Some(" , ".to_string())), None);
        assert_eq!(
            comma_list(Some("HR,".to_string())),
            Some(FilterInput::from(vec!["HR"]))
        );
        assert_eq!(
            comma_list(Some("HR, Sales".to_string())),
            Some(FilterInput::from(vec!["HR", "Sales"]))
        );
        assert_eq!(
            comma_list(Some("San Francisco".to_string())),
            Some(FilterInput::from(vec!["San Francisco"]))
        );
    }

    #[test]
    fn test_request_accepts_null_scalar_and_list() {
        let request: DashboardRequest = serde_json::from_str(
            r#"{"departments": "HR", "positions": ["VP", "Intern"], "locations": null}"#,
        )
        .unwrap();

        assert_eq!(request.departments, Some(FilterInput::from("HR")));
        assert_eq!(request.positions, Some(FilterInput::from(vec!["VP", "Intern"])));
        assert_eq!(request.locations, None);
        assert_eq!(request.page, None);
    }
}
