//! HTTP API handlers and shared state

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, Json};
use serde::Serialize;

use crate::charts::{ChartConfig, ChartKind};
use crate::config::Config;
use crate::page::embed_json;

/// A chart payload ready to be written into the page.
///
/// Text is re-serialized through [`embed_json`], so it is safe inside a
/// `<script>` element.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedPayload {
    pub data: String,
    pub max: Option<String>,
}

/// Payloads for the analytics page, keyed by chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsPayloads {
    payloads: HashMap<ChartKind, EmbeddedPayload>,
}

fn read_payload_file(dir: &Path, element_id: &str) -> Result<Option<String>> {
    let path = dir.join(format!("{}.json", element_id));
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn reembed(text: &str, element_id: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("Invalid JSON in {}", element_id))?;
    Ok(embed_json(&value)?)
}

impl AnalyticsPayloads {
    /// Load `<data element id>.json` for every chart on the page.
    ///
    /// A missing file leaves its chart off the page. A malformed file is an
    /// error: the page must not ship data the client cannot parse.
    pub fn load(dir: &Path, charts: &ChartConfig) -> Result<Self> {
        let mut payloads = HashMap::new();

        for kind in charts.page_kinds() {
            let Some(data) = read_payload_file(dir, kind.data_element_id())? else {
                tracing::info!(
                    "No payload for {} in {}, chart skipped",
                    kind.data_element_id(),
                    dir.display()
                );
                continue;
            };
            let max = match kind.max_element_id() {
                Some(id) => read_payload_file(dir, id)?,
                None => None,
            };

            kind.render_call(&data, max.as_deref(), charts)
                .with_context(|| format!("Payload for {:?} rejected", kind))?;

            let embedded = EmbeddedPayload {
                data: reembed(&data, kind.data_element_id())?,
                max: match (kind.max_element_id(), max) {
                    (Some(id), Some(max)) => Some(reembed(&max, id)?),
                    _ => None,
                },
            };
            payloads.insert(kind, embedded);
        }

        tracing::info!("Loaded {} chart payloads", payloads.len());
        Ok(Self { payloads })
    }

    pub fn insert(&mut self, kind: ChartKind, payload: EmbeddedPayload) {
        self.payloads.insert(kind, payload);
    }

    pub fn get(&self, kind: ChartKind) -> Option<&EmbeddedPayload> {
        self.payloads.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub payloads: Arc<AnalyticsPayloads>,
}

impl AppState {
    pub fn new(config: Config, payloads: AnalyticsPayloads) -> Self {
        Self {
            config: Arc::new(config),
            payloads: Arc::new(payloads),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub charts: usize,
    pub default_theme: &'static str,
}

/// GET /status - Service health and build info
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "caregiving-analytics",
        version: env!("CGA_VERSION"),
        git_sha: env!("CGA_GIT_SHA"),
        charts: state.payloads.len(),
        default_theme: state.config.default_theme.as_str(),
    })
}
