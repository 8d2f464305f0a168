//! Shared Dioxus components for the server-rendered pages.

pub mod chart;
pub mod layout;
pub mod theme;

pub use chart::ChartPanel;
pub use layout::Layout;
pub use theme::ThemeDropdown;
