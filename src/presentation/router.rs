// Route table for the dashboard service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_query, dashboard_update, filter_options, headcounts, health_check, index,
};
use crate::presentation::simplified;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/filters", get(filter_options))
        .route("/api/dashboard", get(dashboard_query).post(dashboard_update))
        .route("/api/headcounts", get(headcounts))
        .with_state(state)
        .nest("/simple", simplified::router())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::headcount_service::HeadcountService;
    use crate::domain::employee::fixtures::employee;
    use crate::domain::employee::Dataset;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let dataset = Dataset::new(vec![
            employee(1, "HR", "Manager", "Tokyo"),
            employee(2, "Finance", "Intern", "Berlin"),
            employee(3, "HR", "VP", "Berlin"),
            employee(4, "Sales", "Manager", "San Francisco"),
        ]);
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(dataset), 20, 10),
            headcount_service: HeadcountService::new(),
        });
        build_router(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, String, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, body)
    }

    async fn get_json(uri: &str) -> Value {
        let (status, content_type, body) =
            send(Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK, "GET {}", uri);
        assert_eq!(content_type, "application/json");
        serde_json::from_slice(&body).unwrap()
    }

    async fn post_json(body: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::post("/api/dashboard")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _, body) = send(request).await;
        (status, body)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, _, body) = send(Request::get("/healthz").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_headcounts_fixed_body() {
        let (status, content_type, body) =
            send(Request::get("/api/headcounts").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"departments":["HR","Finance","Engineering","Marketing","Sales"],"counts":[20,15,30,10,25]}"#
        );
    }

    #[tokio::test]
    async fn test_filter_options() {
        let options = get_json("/api/filters").await;
        assert_eq!(options["departments"], serde_json::json!(["HR", "Finance", "Sales"]));
        assert_eq!(
            options["locations"],
            serde_json::json!(["Tokyo", "Berlin", "San Francisco"])
        );
    }

    #[tokio::test]
    async fn test_dashboard_query_filters() {
        let update = get_json("/api/dashboard?department=HR&location=Berlin,Tokyo").await;

        assert_eq!(update["table"]["total_rows"], 2);
        assert_eq!(update["table"]["rows"][0]["id"], 1);
        assert_eq!(update["table"]["rows"][1]["id"], 3);
        assert_eq!(update["salary_distribution"]["kind"], "histogram");
        assert_eq!(update["engagement_by_location"]["kind"], "box");
    }

    #[tokio::test]
    async fn test_dashboard_query_page() {
        let update = get_json("/api/dashboard?page=1").await;
        assert_eq!(update["table"]["total_rows"], 4);
        assert_eq!(update["table"]["page"], 1);
        assert_eq!(update["table"]["rows"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_dashboard_post_scalar_and_list() {
        let (status, body) =
            post_json(r#"{"departments": "HR", "positions": ["VP"], "locations": null}"#).await;
        assert_eq!(status, StatusCode::OK);

        let update: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(update["table"]["total_rows"], 1);
        assert_eq!(update["table"]["rows"][0]["name"], "Employee 3");
    }

    #[tokio::test]
    async fn test_unknown_department_returns_empty_charts() {
        let (status, body) = post_json(r#"{"departments": ["NoSuchDept"]}"#).await;
        assert_eq!(status, StatusCode::OK);

        let update: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(update["table"]["total_rows"], 0);
        for chart in [
            "salary_distribution",
            "age_tenure_scatter",
            "department_position_heatmap",
            "performance_by_gender",
            "engagement_by_location",
        ] {
            assert!(update[chart].is_object(), "{} missing", chart);
            assert!(update[chart]["kind"].is_string());
        }
        assert_eq!(update["department_position_heatmap"]["cells"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_blank_list_entry_matches_nothing() {
        let (status, body) = post_json(r#"{"departments": [""]}"#).await;
        assert_eq!(status, StatusCode::OK);
        let update: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(update["table"]["total_rows"], 0);

        let update = get_json("/api/dashboard?department=").await;
        assert_eq!(update["table"]["total_rows"], 4);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, _) = post_json(r#"{"departments": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, content_type, body) =
            send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(String::from_utf8(body).unwrap().contains("HR Analytics Dashboard"));
    }

    #[tokio::test]
    async fn test_simplified_chart_and_page() {
        let chart = get_json("/simple/chart").await;
        assert_eq!(chart["title"], "Salary by Department");
        assert_eq!(chart["kind"], "bar");
        assert_eq!(
            chart["categories"],
            serde_json::json!(["HR", "Finance", "Engineering", "Marketing", "Sales"])
        );
        assert_eq!(chart["series"][0]["values"][0], 250_000.0);

        let (status, _, body) = send(Request::get("/simple").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Salary by Department"));
        assert!(!html.contains("__CHART_SPEC__"));
    }

    #[tokio::test]
    async fn test_brotli_negotiation() {
        let request = Request::get("/api/headcounts")
            .header(header::ACCEPT_ENCODING, "br")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }
}
