//! Chart container with its embedded JSON payload.

use dioxus::prelude::*;

use crate::api::EmbeddedPayload;
use crate::charts::ChartKind;

/// One chart: the container the library draws into plus the
/// `application/json` elements the client reads.
#[component]
pub fn ChartPanel(kind: ChartKind, payload: EmbeddedPayload) -> Element {
    let height = match kind {
        ChartKind::DailySum => "320px",
        _ => "420px",
    };

    rsx! {
        section { class: "col-12 mb-4",
            div {
                id: kind.chart_element_id(),
                class: "analytics-chart",
                style: "width: 100%; height: {height};",
            }
            script {
                id: kind.data_element_id(),
                r#type: "application/json",
                dangerous_inner_html: "{payload.data}"
            }
            if let (Some(max_id), Some(max)) = (kind.max_element_id(), payload.max.clone()) {
                script {
                    id: max_id,
                    r#type: "application/json",
                    dangerous_inner_html: "{max}"
                }
            }
        }
    }
}
