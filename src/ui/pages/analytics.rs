//! Work analytics page.
//!
//! One panel per chart whose payload the server has; charts without data
//! are left off entirely.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::AnalyticsPayloads;
use crate::page::PageConfig;
use crate::theme::Theme;
use crate::ui::components::{ChartPanel, Layout};

#[component]
pub fn AnalyticsPage(
    theme: Theme,
    page_config: PageConfig,
    page_config_json: String,
    payloads: Arc<AnalyticsPayloads>,
) -> Element {
    let panels: Vec<_> = page_config
        .charts
        .page_kinds()
        .into_iter()
        .filter_map(|kind| {
            let payload = payloads.get(kind)?.clone();
            Some((kind.data_element_id(), kind, payload))
        })
        .collect();

    rsx! {
        Layout {
            title: "Work analytics".to_string(),
            theme,
            page_config: page_config.clone(),
            page_config_json,
            h1 { class: "h3 mb-4", "Work analytics" }
            if panels.is_empty() {
                p { class: "text-body-secondary", "No analytics data available yet." }
            }
            div { class: "row",
                for (key , kind , payload) in panels {
                    ChartPanel { key: "{key}", kind, payload }
                }
            }
        }
    }
}
