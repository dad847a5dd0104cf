// Dashboard domain model - what the ready view shows
use super::chart::{self, ChartData};
use super::stats::{DashboardStats, Feed};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Statistics Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Real-time statistics and analytics";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub feed: Feed,
    pub title: String,
    /// `None` until the feed has data; the panel is drawn without a chart.
    pub chart: Option<ChartData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub fetched_at: Option<DateTime<Utc>>,
    pub panels: Vec<ChartPanel>,
}

impl Dashboard {
    /// Derive the four panels from the stored payloads. Nothing is cached,
    /// so every render recomputes them.
    pub fn from_stats(stats: Option<&DashboardStats>) -> Self {
        let panels = Feed::ALL
            .iter()
            .map(|&feed| ChartPanel {
                feed,
                title: stats
                    .map(|s| s.title_for(feed))
                    .unwrap_or_else(|| feed.fallback_title())
                    .to_string(),
                chart: derive_chart(stats, feed),
            })
            .collect();

        Self {
            title: DASHBOARD_TITLE.to_string(),
            subtitle: DASHBOARD_SUBTITLE.to_string(),
            fetched_at: stats.map(|s| s.fetched_at),
            panels,
        }
    }
}

fn derive_chart(stats: Option<&DashboardStats>, feed: Feed) -> Option<ChartData> {
    match feed {
        Feed::Sales => chart::sales_chart(stats.map(|s| &s.sales)),
        Feed::Users => chart::users_chart(stats.map(|s| &s.users)),
        Feed::Performance => chart::performance_chart(stats.map(|s| &s.performance)),
        Feed::Revenue => chart::revenue_chart(stats.map(|s| &s.revenue)),
    }
}
