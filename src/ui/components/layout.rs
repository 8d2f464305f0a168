//! Layout component wrapping all pages with Bootstrap and the chart libraries.

use dioxus::prelude::*;

use super::theme::ThemeDropdown;
use crate::page::{PageConfig, PAGE_CONFIG_ELEMENT_ID};
use crate::theme::Theme;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5.4.3/dist/echarts.min.js";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Loads the wasm client built by wasm-bindgen (`--target web`) into /pkg.
const CLIENT_LOADER: &str = r#"
import init from '/pkg/caregiving_analytics.js';
init();
"#;

const CUSTOM_STYLES: &str = r#"
.analytics-chart { min-height: 280px; }
.dropdown-item.active { font-weight: 600; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Theme rendered before the client takes over
    pub theme: Theme,
    /// Config handed to the client
    pub page_config: PageConfig,
    /// `page_config` already serialized for embedding
    pub page_config_json: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CGA_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Caregiving Analytics" }
            link { rel: "stylesheet", href: BOOTSTRAP_CSS }
            style { {CUSTOM_STYLES} }
            script { src: ECHARTS_JS }
            script { src: PLOTLY_JS }
            script {
                id: PAGE_CONFIG_ELEMENT_ID,
                r#type: "application/json",
                dangerous_inner_html: "{props.page_config_json}"
            }
        }
        body {
            nav { class: "navbar navbar-expand bg-body-tertiary mb-4",
                div { class: "container",
                    a { class: "navbar-brand", href: "/", "Caregiving Analytics" }
                    ul { class: "navbar-nav ms-auto",
                        ThemeDropdown {
                            theme: props.theme,
                            config: props.page_config.theme.clone(),
                        }
                    }
                }
            }
            main { class: "container",
                {props.children}
            }
            footer { class: "container text-center py-3",
                small { class: "text-body-secondary", "Caregiving Analytics v{version}" }
            }
            script { src: BOOTSTRAP_JS }
            script { r#type: "module", dangerous_inner_html: CLIENT_LOADER }
        }
    }
}
