// Application layer - Use cases over the statistics feeds
pub mod dashboard_service;
pub mod dashboard_view;
pub mod stats_source;
