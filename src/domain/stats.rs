// Statistics feed domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One of the four statistics endpoints exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    Sales,
    Users,
    Performance,
    Revenue,
}

impl Feed {
    pub const ALL: [Feed; 4] = [Feed::Sales, Feed::Users, Feed::Performance, Feed::Revenue];

    pub fn path(&self) -> &'static str {
        match self {
            Feed::Sales => "/api/stats/sales",
            Feed::Users => "/api/stats/users",
            Feed::Performance => "/api/stats/performance",
            Feed::Revenue => "/api/stats/revenue",
        }
    }

    /// Heading used when the payload arrives without a title
    pub fn fallback_title(&self) -> &'static str {
        match self {
            Feed::Sales => "Sales Statistics",
            Feed::Users => "User Statistics",
            Feed::Performance => "Performance Metrics",
            Feed::Revenue => "Revenue Breakdown",
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feed::Sales => "sales",
            Feed::Users => "users",
            Feed::Performance => "performance",
            Feed::Revenue => "revenue",
        };
        f.write_str(name)
    }
}

/// Envelope shared by every feed: a title and an ordered list of records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsPayload<R> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub data: Vec<R>,
}

impl<R> StatsPayload<R> {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, data: Vec<R>) -> Self {
        Self {
            title: title.into(),
            data,
        }
    }
}

/// A `null` title is treated like a missing one; the feed heading fills in.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SalesRecord {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserRecord {
    pub month: String,
    pub total_users: f64,
    pub active_users: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PerformanceRecord {
    pub category: String,
    pub value: f64,
    pub status: String,
}

impl PerformanceRecord {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevenueRecord {
    pub category: String,
    pub amount: f64,
}

pub type SalesStats = StatsPayload<SalesRecord>;
pub type UserStats = StatsPayload<UserRecord>;
pub type PerformanceStats = StatsPayload<PerformanceRecord>;
pub type RevenueStats = StatsPayload<RevenueRecord>;

/// Result of one successful joined fetch. Replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub sales: SalesStats,
    pub users: UserStats,
    pub performance: PerformanceStats,
    pub revenue: RevenueStats,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardStats {
    pub fn new(
        sales: SalesStats,
        users: UserStats,
        performance: PerformanceStats,
        revenue: RevenueStats,
    ) -> Self {
        Self {
            sales,
            users,
            performance,
            revenue,
            fetched_at: Utc::now(),
        }
    }

    /// Payload title for a feed, falling back to the feed's default heading
    pub fn title_for(&self, feed: Feed) -> &str {
        let title = match feed {
            Feed::Sales => &self.sales.title,
            Feed::Users => &self.users.title,
            Feed::Performance => &self.performance.title,
            Feed::Revenue => &self.revenue.title,
        };

        if title.trim().is_empty() {
            feed.fallback_title()
        } else {
            title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_extra_fields_are_ignored() {
        let body = r#"{
            "title": "Revenue Breakdown",
            "total": 1000,
            "data": [{"category": "Services", "amount": 400, "percentage": 40.0}]
        }"#;

        let payload: RevenueStats = serde_json::from_str(body).unwrap();
        assert_eq!(payload.title, "Revenue Breakdown");
        assert_eq!(payload.data[0].amount, 400.0);
    }

    #[test]
    fn test_null_or_missing_title_falls_back() {
        let null_title: SalesStats = serde_json::from_str(
            r#"{"title": null, "data": [{"month": "Jan", "sales": 1}]}"#,
        )
        .unwrap();
        let no_title: PerformanceStats =
            serde_json::from_str(r#"{"data": [{"category": "CPU", "value": 5, "status": "healthy"}]}"#)
                .unwrap();

        assert_eq!(null_title.title, "");
        assert_eq!(null_title.data.len(), 1);

        let stats = DashboardStats::new(
            null_title,
            StatsPayload::new("Users", vec![]),
            no_title,
            StatsPayload::new("Revenue", vec![]),
        );
        assert_eq!(stats.title_for(Feed::Sales), "Sales Statistics");
        assert_eq!(stats.title_for(Feed::Performance), "Performance Metrics");
    }

    #[test]
    fn test_missing_record_field_is_rejected() {
        let body = r#"{"title": "Sales", "data": [{"month": "Jan"}]}"#;
        assert!(serde_json::from_str::<SalesStats>(body).is_err());
    }

    #[test]
    fn test_feed_paths() {
        let paths: Vec<&str> = Feed::ALL.iter().map(|f| f.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/stats/sales",
                "/api/stats/users",
                "/api/stats/performance",
                "/api/stats/revenue"
            ]
        );
    }

    #[test]
    fn test_title_falls_back_when_empty() {
        let stats = DashboardStats::new(
            StatsPayload::new("", vec![]),
            StatsPayload::new("User Growth Statistics", vec![]),
            StatsPayload::new("  ", vec![]),
            StatsPayload::new("Revenue", vec![]),
        );

        assert_eq!(stats.title_for(Feed::Sales), "Sales Statistics");
        assert_eq!(stats.title_for(Feed::Users), "User Growth Statistics");
        assert_eq!(stats.title_for(Feed::Performance), "Performance Metrics");
        assert_eq!(stats.title_for(Feed::Revenue), "Revenue");
    }
}
