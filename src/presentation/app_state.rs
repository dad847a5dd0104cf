// Application state for HTTP handlers
use crate::application::dashboard_view::DashboardView;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<DashboardView>,
}
