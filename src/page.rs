//! Configuration the server embeds in the page for the client.

use serde::{Deserialize, Serialize};

use crate::charts::ChartConfig;
use crate::theme::ThemeToggleConfig;

/// Id of the `<script type="application/json">` element holding [`PageConfig`]
pub const PAGE_CONFIG_ELEMENT_ID: &str = "analytics-page-config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub theme: ThemeToggleConfig,
    #[serde(default)]
    pub charts: ChartConfig,
}

/// Serialize a value for a `<script type="application/json">` element.
///
/// `<` only ever appears inside JSON strings, so escaping it keeps the JSON
/// identical while making `</script>` impossible.
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_json_escapes_closing_tags() {
        let embedded = embed_json(&serde_json::json!({"name": "</script><b>"})).unwrap();
        assert!(!embedded.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back["name"], "</script><b>");
    }

    #[test]
    fn test_page_config_defaults_from_empty_object() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }
}
