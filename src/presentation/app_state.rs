// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::headcount_service::HeadcountService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub headcount_service: HeadcountService,
}
