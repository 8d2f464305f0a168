//! Browser entry point (wasm32 only).
//!
//! Reads the page config the server embedded, binds the theme dropdown and
//! renders the analytics charts once on load.

pub mod charts;
pub mod dom;
pub mod toggle;

use wasm_bindgen::prelude::*;

use crate::charts::ChartError;
use crate::page::{PageConfig, PAGE_CONFIG_ELEMENT_ID};
use crate::theme::ThemeToggle;

pub use dom::DocumentSurface;

/// Page config from its JSON element; a page without one uses defaults.
pub fn read_page_config(surface: &DocumentSurface) -> Result<PageConfig, ChartError> {
    match surface.element_text(PAGE_CONFIG_ELEMENT_ID) {
        Some(text) => serde_json::from_str(&text).map_err(|source| ChartError::Json {
            element: PAGE_CONFIG_ELEMENT_ID.to_string(),
            source,
        }),
        None => Ok(PageConfig::default()),
    }
}

/// Route `tracing` events to the browser console.
///
/// `tracing` falls back to `log` records when no subscriber is set, and
/// `console_log` prints those. A second call keeps the first logger.
fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("Console logger already installed");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();

    let surface = DocumentSurface::from_window().ok_or("No document")?;
    let config = read_page_config(&surface).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if let Err(e) = config.theme.validate() {
        tracing::error!("Theme toggle not bound: {}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }

    toggle::bind_theme_toggle(&surface, ThemeToggle::new(config.theme));

    let rendered = charts::render_charts(&surface, &config.charts);
    tracing::info!(rendered, "Analytics client started");
    Ok(())
}
