//! Caregiving Analytics - theme toggle and chart glue
//!
//! Presentation layer for the caregiving work analytics pages.
//!
//! This library provides:
//! - Light/dark theme toggle state machine (shared by server and browser)
//! - Chart catalogue turning embedded JSON into ECharts/Plotly options
//! - Server-rendered analytics page (Dioxus SSR, `server` feature)
//! - Browser client binding the toggle and rendering charts (wasm32)

pub mod charts;
pub mod page;
pub mod theme;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod client;
