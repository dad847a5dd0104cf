// Dashboard view - fetch lifecycle and render selection for the single view
use crate::application::dashboard_service::DashboardService;
use crate::domain::view_state::{select_view, RenderedView, ViewState};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    Started,
    /// A cycle was already in flight; nothing new was issued
    AlreadyLoading,
}

/// Owns the view state. Only a fetch cycle writes to it, and at most one
/// cycle runs at a time: retry is disabled while loading.
pub struct DashboardView {
    service: DashboardService,
    state: watch::Sender<ViewState>,
    in_flight: AtomicBool,
}

impl DashboardView {
    pub fn new(service: DashboardService) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            service,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Start the initial fetch in the background.
    pub fn mount(self: &Arc<Self>) -> RetryOutcome {
        tracing::info!("Mounting dashboard view");
        self.retry()
    }

    /// Re-run the whole four-feed cycle in the background.
    pub fn retry(self: &Arc<Self>) -> RetryOutcome {
        if !self.try_begin() {
            tracing::debug!(
                loading = self.state.borrow().is_loading(),
                "Fetch already in flight, ignoring retry"
            );
            return RetryOutcome::AlreadyLoading;
        }

        let view = Arc::clone(self);
        tokio::spawn(async move { view.run_cycle().await });
        RetryOutcome::Started
    }

    /// Run a cycle to completion on the current task.
    #[cfg(test)]
    pub async fn load(&self) -> RetryOutcome {
        if !self.try_begin() {
            return RetryOutcome::AlreadyLoading;
        }
        self.run_cycle().await;
        RetryOutcome::Started
    }

    pub fn current(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn render(&self) -> RenderedView {
        select_view(&self.state.borrow())
    }

    fn try_begin(&self) -> bool {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.state.send_replace(ViewState::Loading);
        true
    }

    async fn run_cycle(&self) {
        let next = match self.service.fetch_all().await {
            Ok(stats) => {
                tracing::info!("Dashboard loaded");
                ViewState::Ready {
                    stats: Arc::new(stats),
                }
            }
            Err(failure) => {
                tracing::error!(error = %failure, "Error fetching data");
                ViewState::error()
            }
        };

        self.state.send_replace(next);
        self.in_flight.store(false, Ordering::Release);
    }
}
