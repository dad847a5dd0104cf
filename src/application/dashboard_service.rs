// Dashboard service - Use case for the joined fetch of all four feeds
use crate::application::stats_source::{FetchError, FetchFailure, StatsSource};
use crate::domain::stats::{DashboardStats, Feed};
use std::sync::Arc;

pub type FetchOutcome = Result<DashboardStats, FetchFailure>;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn StatsSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    /// Request all four feeds concurrently and wait for every one to settle.
    /// Succeeds only if all four do; otherwise the first failure in feed
    /// order is returned and every partial result is dropped.
    pub async fn fetch_all(&self) -> FetchOutcome {
        let (sales, users, performance, revenue) = tokio::join!(
            self.source.fetch_sales(),
            self.source.fetch_users(),
            self.source.fetch_performance(),
            self.source.fetch_revenue(),
        );

        let failures: Vec<(Feed, &FetchError)> = [
            (Feed::Sales, sales.as_ref().err()),
            (Feed::Users, users.as_ref().err()),
            (Feed::Performance, performance.as_ref().err()),
            (Feed::Revenue, revenue.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(feed, err)| err.map(|e| (feed, e)))
        .collect();

        for (feed, err) in &failures {
            tracing::error!(%feed, error = %err, "Error fetching feed");
        }

        let stats = DashboardStats::new(
            sales.map_err(|e| FetchFailure::new(Feed::Sales, e))?,
            users.map_err(|e| FetchFailure::new(Feed::Users, e))?,
            performance.map_err(|e| FetchFailure::new(Feed::Performance, e))?,
            revenue.map_err(|e| FetchFailure::new(Feed::Revenue, e))?,
        );

        tracing::debug!(
            sales = stats.sales.data.len(),
            users = stats.users.data.len(),
            performance = stats.performance.data.len(),
            revenue = stats.revenue.data.len(),
            "Fetched all feeds"
        );

        Ok(stats)
    }
}
