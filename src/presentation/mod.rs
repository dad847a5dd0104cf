// Presentation layer - HTTP surface of the dashboard view
pub mod app_state;
pub mod handlers;
pub mod page;
