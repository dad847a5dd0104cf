// HTTP stats source - reqwest client for the statistics backend
use crate::application::stats_source::{FetchError, StatsSource};
use crate::domain::stats::{Feed, PerformanceStats, RevenueStats, SalesStats, UserStats};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest body excerpt kept in a status error
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatsSource {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn feed_url(&self, feed: Feed) -> String {
        format!("{}{}", self.base_url, feed.path())
    }

    async fn get_json<T: DeserializeOwned>(&self, feed: Feed) -> Result<T, FetchError> {
        let url = self.feed_url(feed);
        tracing::debug!(%feed, %url, "Requesting feed");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        // A JSON error body must not be mistaken for data
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(FetchError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn fetch_sales(&self) -> Result<SalesStats, FetchError> {
        self.get_json(Feed::Sales).await
    }

    async fn fetch_users(&self) -> Result<UserStats, FetchError> {
        self.get_json(Feed::Users).await
    }

    async fn fetch_performance(&self) -> Result<PerformanceStats, FetchError> {
        self.get_json(Feed::Performance).await
    }

    async fn fetch_revenue(&self) -> Result<RevenueStats, FetchError> {
        self.get_json(Feed::Revenue).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
    use serde_json::json;
    use std::sync::Arc;

    async fn sales() -> impl IntoResponse {
        Json(json!({
            "title": "Monthly Sales Statistics",
            "data": [
                {"month": "Jan", "sales": 100, "revenue": 1000},
                {"month": "Feb", "sales": 150, "revenue": 1500}
            ]
        }))
    }

    async fn users() -> impl IntoResponse {
        Json(json!({
            "title": "User Growth Statistics",
            "data": [{"month": "Jan", "total_users": 1200, "new_users": 200, "active_users": 900}]
        }))
    }

    async fn performance() -> impl IntoResponse {
        Json(json!({
            "title": "System Performance Metrics",
            "data": [{"category": "CPU Usage", "value": 80, "status": "healthy"}]
        }))
    }

    async fn revenue() -> impl IntoResponse {
        Json(json!({
            "title": "Revenue Breakdown",
            "total": 30000,
            "data": [{"category": "Services", "amount": 30000, "percentage": 100.0}]
        }))
    }

    async fn server_error() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"title": "oops", "data": []})),
        )
    }

    async fn not_json() -> impl IntoResponse {
        "<html>maintenance</html>"
    }

    async fn hang() -> impl IntoResponse {
        tokio::time::sleep(Duration::from_secs(30)).await;
        "late"
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}/", addr)
    }

    fn backend() -> Router {
        Router::new()
            .route("/api/stats/sales", get(sales))
            .route("/api/stats/users", get(users))
            .route("/api/stats/performance", get(performance))
            .route("/api/stats/revenue", get(revenue))
    }

    fn client(base_url: String) -> HttpStatsSource {
        HttpStatsSource::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_and_decodes_every_feed() {
        let source = client(serve(backend()).await);

        let sales = source.fetch_sales().await.unwrap();
        assert_eq!(sales.title, "Monthly Sales Statistics");
        assert_eq!(sales.data[1].sales, 150.0);

        let users = source.fetch_users().await.unwrap();
        assert_eq!(users.data[0].active_users, 900.0);

        let performance = source.fetch_performance().await.unwrap();
        assert!(performance.data[0].is_healthy());

        let revenue = source.fetch_revenue().await.unwrap();
        assert_eq!(revenue.data[0].amount, 30000.0);
    }

    #[tokio::test]
    async fn test_non_success_status_with_json_body_is_a_failure() {
        let router = Router::new().route("/api/stats/sales", get(server_error));
        let source = client(serve(router).await);

        match source.fetch_sales().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("oops"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_a_failure() {
        let source = client(serve(Router::new()).await);
        assert!(matches!(
            source.fetch_users().await,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_failure() {
        let router = Router::new().route("/api/stats/revenue", get(not_json));
        let source = client(serve(router).await);

        assert!(matches!(source.fetch_revenue().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_hung_backend_times_out() {
        let router = Router::new().route("/api/stats/performance", get(hang));
        let base_url = serve(router).await;
        let source = HttpStatsSource::new(base_url, Duration::from_millis(200)).unwrap();

        assert!(matches!(
            source.fetch_performance().await,
            Err(FetchError::Request(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_request_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = client(format!("http://{}", addr));
        assert!(matches!(source.fetch_sales().await, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn test_joined_fetch_over_http_fails_on_one_bad_feed() {
        let router = Router::new()
            .route("/api/stats/sales", get(sales))
            .route("/api/stats/users", get(server_error))
            .route("/api/stats/performance", get(performance))
            .route("/api/stats/revenue", get(revenue));
        let source = Arc::new(client(serve(router).await));
        let service = DashboardService::new(source);

        let failure = service.fetch_all().await.unwrap_err();
        assert_eq!(failure.feed, Feed::Users);
    }
}
