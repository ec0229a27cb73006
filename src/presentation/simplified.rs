// Simplified deployment variant - One salary chart, no filters
use crate::application::projections::salary_by_department;
use crate::domain::chart::ChartSpec;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::static_tables::simplified_salary_table;
use crate::presentation::error::ApiError;
use axum::{
    body::Body,
    http::{HeaderMap, Response},
    response::Html,
    routing::get,
    Router,
};

const SIMPLE_HTML: &str = include_str!("assets/simple.html");
const CHART_PLACEHOLDER: &str = "__CHART_SPEC__";

/// Self-contained handler set for hosting the simplified dashboard on its own
/// or nested under another router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(page))
        .route("/chart", get(chart))
}

fn salary_chart() -> ChartSpec {
    salary_by_department(&simplified_salary_table())
}

/// Page with the chart spec embedded, so it renders without a second request
async fn page() -> Result<Html<String>, ApiError> {
    let spec = serde_json::to_string(&salary_chart())
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    Ok(Html(SIMPLE_HTML.replace(CHART_PLACEHOLDER, &spec)))
}

async fn chart(headers: HeaderMap) -> Result<Response<Body>, ApiError> {
    Ok(json_response(&salary_chart(), accepts_brotli(&headers)).await?)
}
