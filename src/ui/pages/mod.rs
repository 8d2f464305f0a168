//! Page components for the server-rendered UI.
//!
//! Each page is a Dioxus component that renders a full page using the Layout component.

pub mod analytics;

pub use analytics::AnalyticsPage;
