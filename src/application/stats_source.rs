// Stats source trait - access to the four statistics feeds
use crate::domain::stats::{Feed, PerformanceStats, RevenueStats, SalesStats, UserStats};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout or other transport error
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not JSON of the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// A failed feed within a joined fetch.
#[derive(Debug, Error)]
#[error("{feed} feed failed: {source}")]
pub struct FetchFailure {
    pub feed: Feed,
    #[source]
    pub source: FetchError,
}

impl FetchFailure {
    pub fn new(feed: Feed, source: FetchError) -> Self {
        Self { feed, source }
    }
}

#[async_trait]
pub trait StatsSource: Send + Sync {
    /// GET /api/stats/sales
    async fn fetch_sales(&self) -> Result<SalesStats, FetchError>;

    /// GET /api/stats/users
    async fn fetch_users(&self) -> Result<UserStats, FetchError>;

    /// GET /api/stats/performance
    async fn fetch_performance(&self) -> Result<PerformanceStats, FetchError>;

    /// GET /api/stats/revenue
    async fn fetch_revenue(&self) -> Result<RevenueStats, FetchError>;
}
