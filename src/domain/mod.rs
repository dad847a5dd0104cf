// Domain layer - Feed payloads, chart data and view state
pub mod chart;
pub mod dashboard;
pub mod stats;
pub mod view_state;
