// View state domain model - the three states of the dashboard view
use super::dashboard::Dashboard;
use super::stats::DashboardStats;
use serde::Serialize;
use std::sync::Arc;

/// Shown whenever a fetch cycle fails. Details only go to the log.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch data. Make sure the backend server is running on port 8000.";

pub const LOADING_MESSAGE: &str = "Loading statistics...";

/// Exactly one state is active. Each fetch cycle replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Error { message: String },
    Ready { stats: Arc<DashboardStats> },
}

impl ViewState {
    pub fn error() -> Self {
        ViewState::Error {
            message: FETCH_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error { .. } => "error",
            ViewState::Ready { .. } => "ready",
        }
    }
}

/// What the rendering layer draws for a given state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum RenderedView {
    Loading { message: String },
    Error { message: String, retry: bool },
    Ready { dashboard: Dashboard },
}

/// Render selection. Pure, recomputed on every call.
pub fn select_view(state: &ViewState) -> RenderedView {
    match state {
        ViewState::Loading => RenderedView::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        ViewState::Error { message } => RenderedView::Error {
            message: message.clone(),
            retry: true,
        },
        ViewState::Ready { stats } => RenderedView::Ready {
            dashboard: Dashboard::from_stats(Some(stats.as_ref())),
        },
    }
}
