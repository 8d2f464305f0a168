//! ECharts / Plotly bindings.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::dom::DocumentSurface;
use crate::charts::{ChartConfig, ChartError, ChartKind, RenderCall};

#[wasm_bindgen]
extern "C" {
    type EChartsInstance;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(element: &web_sys::Element) -> Result<EChartsInstance, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setOption)]
    fn set_option(this: &EChartsInstance, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(element_id: &str, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

/// Plain JS objects, not `Map`s, so the libraries can read them
fn to_js(value: &Value) -> Result<JsValue, ChartError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::Js(e.to_string()))
}

fn js_error(e: JsValue) -> ChartError {
    ChartError::Js(format!("{:?}", e))
}

/// Hand a built chart to its library.
pub fn dispatch(surface: &DocumentSurface, call: &RenderCall) -> Result<(), ChartError> {
    match call {
        RenderCall::ECharts {
            element_id,
            options,
        } => {
            let element = surface
                .element(element_id)
                .ok_or_else(|| ChartError::MissingElement(element_id.to_string()))?;
            let chart = echarts_init(&element).map_err(js_error)?;
            chart.set_option(&to_js(options)?).map_err(js_error)
        }
        RenderCall::Plotly {
            element_id,
            data,
            layout,
        } => {
            plotly_new_plot(element_id, &to_js(data)?, &to_js(layout)?).map_err(js_error)?;
            Ok(())
        }
    }
}

/// Read, build and render one chart.
pub fn render_chart(
    surface: &DocumentSurface,
    kind: ChartKind,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let data_id = kind.data_element_id();
    let data_text = surface
        .element_text(data_id)
        .ok_or_else(|| ChartError::MissingElement(data_id.to_string()))?;
    let max_text = kind.max_element_id().and_then(|id| surface.element_text(id));

    let call = kind.render_call(&data_text, max_text.as_deref(), config)?;
    dispatch(surface, &call)
}

/// Render every chart whose container is on this page.
///
/// Charts are independent; one failing does not stop the others.
pub fn render_charts(surface: &DocumentSurface, config: &ChartConfig) -> usize {
    let mut rendered = 0;
    for kind in config.page_kinds() {
        if surface.element(kind.chart_element_id()).is_none() {
            continue;
        }
        match render_chart(surface, kind, config) {
            Ok(()) => rendered += 1,
            Err(e) => tracing::error!(kind = ?kind, "Chart failed: {}", e),
        }
    }
    rendered
}
