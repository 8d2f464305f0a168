//! Web UI handlers - server-rendered analytics pages
//!
//! - components/ - Shared Dioxus components (layout, theme dropdown, chart panel)
//! - pages/ - Page components
//!
//! Pages are rendered with Dioxus SSR. The browser side (theme toggle and
//! chart rendering) lives in the wasm client, see `crate::client`.

pub mod components;
pub mod pages;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::page::embed_json;
use pages::AnalyticsPage;

/// Wrap rendered markup in a document whose root already carries the theme.
fn html_doc(attribute: &str, theme: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" {}=\"{}\">\n{}</html>",
        attribute, theme, body
    )
}

/// Render the analytics page for the current state.
pub fn render_analytics_page(state: &AppState) -> serde_json::Result<String> {
    let page_config = state.config.page_config();
    let page_config_json = embed_json(&page_config)?;
    let theme = state.config.default_theme;
    let attribute = page_config.theme.attribute.clone();
    let payloads = state.payloads.clone();

    let html = dioxus::ssr::render_element(rsx! {
        AnalyticsPage {
            theme,
            page_config,
            page_config_json,
            payloads,
        }
    });
    Ok(html_doc(&attribute, theme.as_str(), &html))
}

/// GET / - Work analytics page
pub async fn analytics_page(State(state): State<AppState>) -> Response {
    match render_analytics_page(&state) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render analytics page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
