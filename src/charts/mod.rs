//! Render-a-chart-from-embedded-JSON utility.
//!
//! Every analytics chart follows the same path: read the JSON the server
//! embedded in a data element, validate it against the record shape for
//! that chart, and build the static options object for the chart library.
//! [`ChartKind`] is the catalogue; [`RenderCall`] is what the client hands
//! to ECharts or Plotly.

pub mod options;
pub mod records;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use records::{CaregiverRoleSummary, DailySummary, RoleAndTypeSummary, TypeSummary};

/// Year shown by the daily heatmap when neither config nor data pick one
pub const DEFAULT_CALENDAR_YEAR: i32 = 2022;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("invalid JSON in #{element}: {source}")]
    Json {
        element: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("chart library call failed: {0}")]
    Js(String),
}

/// Chart library a kind is rendered with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    #[default]
    ECharts,
    Plotly,
}

/// Per-page chart settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Calendar year of the daily heatmap; derived from the data when unset
    #[serde(default)]
    pub calendar_year: Option<i32>,
    /// Library used for the role-and-type chart
    #[serde(default)]
    pub role_and_type_renderer: Renderer,
}

impl ChartConfig {
    /// Kinds rendered on the analytics page, in page order
    pub fn page_kinds(&self) -> [ChartKind; 4] {
        let role_and_type = match self.role_and_type_renderer {
            Renderer::ECharts => ChartKind::RoleAndTypeSum,
            Renderer::Plotly => ChartKind::RoleAndTypeSumPlotly,
        };
        [
            ChartKind::CaregiverRoleSum,
            role_and_type,
            ChartKind::TypeSum,
            ChartKind::DailySum,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    CaregiverRoleSum,
    RoleAndTypeSum,
    RoleAndTypeSumPlotly,
    TypeSum,
    DailySum,
}

/// A fully built chart, ready for the library.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    ECharts {
        element_id: &'static str,
        options: Value,
    },
    Plotly {
        element_id: &'static str,
        data: Value,
        layout: Value,
    },
}

impl RenderCall {
    pub fn element_id(&self) -> &'static str {
        match self {
            RenderCall::ECharts { element_id, .. } | RenderCall::Plotly { element_id, .. } => {
                *element_id
            }
        }
    }
}

/// Parse a JSON array of records, failing hard on malformed input.
pub fn parse_payload<T: DeserializeOwned>(element: &str, text: &str) -> Result<Vec<T>, ChartError> {
    serde_json::from_str(text).map_err(|source| ChartError::Json {
        element: element.to_string(),
        source,
    })
}

fn to_source<T: Serialize>(records: &[T]) -> Value {
    // Records only hold strings, numbers and dates.
    serde_json::to_value(records).unwrap_or(Value::Array(Vec::new()))
}

impl ChartKind {
    /// Container the chart library draws into
    pub fn chart_element_id(&self) -> &'static str {
        match self {
            ChartKind::CaregiverRoleSum => "work-by-caregiver-role-sum-chart",
            ChartKind::RoleAndTypeSum | ChartKind::RoleAndTypeSumPlotly => {
                "work-by-role-and-type-sum-chart"
            }
            ChartKind::TypeSum => "work-by-type-sum-chart",
            ChartKind::DailySum => "work-daily-sum-chart",
        }
    }

    /// Element whose text content is the JSON payload
    pub fn data_element_id(&self) -> &'static str {
        match self {
            ChartKind::CaregiverRoleSum => "work-by-caregiver-role-sum-data",
            ChartKind::RoleAndTypeSum | ChartKind::RoleAndTypeSumPlotly => {
                "work-by-role-and-type-sum-data"
            }
            ChartKind::TypeSum => "work-by-type-sum-data",
            ChartKind::DailySum => "work-daily-sum-data",
        }
    }

    /// Element holding the color-scale maximum (daily heatmap only)
    pub fn max_element_id(&self) -> Option<&'static str> {
        match self {
            ChartKind::DailySum => Some("work-daily-sum-max-data"),
            _ => None,
        }
    }

    pub fn renderer(&self) -> Renderer {
        match self {
            ChartKind::RoleAndTypeSumPlotly => Renderer::Plotly,
            _ => Renderer::ECharts,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::CaregiverRoleSum => "Caregiving minutes by caregiver role",
            ChartKind::RoleAndTypeSum | ChartKind::RoleAndTypeSumPlotly => {
                "Caregiving minutes by role and work type"
            }
            ChartKind::TypeSum => "Caregiving minutes by type of work",
            ChartKind::DailySum => "Daily Caregiving Minutes",
        }
    }

    /// Validate the embedded payload and build the render call.
    ///
    /// `max_text` is required for [`ChartKind::DailySum`] and ignored otherwise.
    pub fn render_call(
        &self,
        data_text: &str,
        max_text: Option<&str>,
        config: &ChartConfig,
    ) -> Result<RenderCall, ChartError> {
        let data_id = self.data_element_id();
        let element_id = self.chart_element_id();

        let call = match self {
            ChartKind::CaregiverRoleSum => {
                let records: Vec<CaregiverRoleSummary> = parse_payload(data_id, data_text)?;
                RenderCall::ECharts {
                    element_id,
                    options: options::bar_chart(
                        self.title(),
                        "Caregiver role",
                        json!(["caregiver_role__name", "total_minutes"]),
                        to_source(&records),
                        1,
                        true,
                    ),
                }
            }
            ChartKind::RoleAndTypeSum => {
                let records: Vec<RoleAndTypeSummary> = parse_payload(data_id, data_text)?;
                RenderCall::ECharts {
                    element_id,
                    options: options::bar_chart(
                        self.title(),
                        "Caregiver role and work type",
                        json!([
                            { "name": "role_name", "type": "categorical" },
                            { "name": "work_type", "type": "categorical" },
                            { "name": "total_minutes", "type": "int" },
                        ]),
                        to_source(&records),
                        2,
                        true,
                    ),
                }
            }
            ChartKind::RoleAndTypeSumPlotly => {
                // Plotly receives the server's traces untouched.
                let traces: Vec<Value> = parse_payload(data_id, data_text)?;
                RenderCall::Plotly {
                    element_id,
                    data: Value::Array(traces),
                    layout: options::grouped_bar_layout(),
                }
            }
            ChartKind::TypeSum => {
                let records: Vec<TypeSummary> = parse_payload(data_id, data_text)?;
                RenderCall::ECharts {
                    element_id,
                    options: options::bar_chart(
                        self.title(),
                        "Type of work",
                        json!(["type__name", "total_minutes"]),
                        to_source(&records),
                        1,
                        false,
                    ),
                }
            }
            ChartKind::DailySum => {
                let days: Vec<DailySummary> = parse_payload(data_id, data_text)?;
                let max_id = self.max_element_id().unwrap_or("work-daily-sum-max-data");
                let max_text = max_text.ok_or_else(|| ChartError::MissingElement(max_id.into()))?;
                let max: f64 =
                    serde_json::from_str(max_text).map_err(|source| ChartError::Json {
                        element: max_id.to_string(),
                        source,
                    })?;
                let year = config
                    .calendar_year
                    .or_else(|| records::latest_year(&days))
                    .unwrap_or(DEFAULT_CALENDAR_YEAR);
                RenderCall::ECharts {
                    element_id,
                    options: options::daily_heatmap(
                        self.title(),
                        to_source(&days),
                        json!(max),
                        &year.to_string(),
                    ),
                }
            }
        };

        tracing::debug!(kind = ?self, element = element_id, "Chart options built");
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_kinds_swap_role_and_type_renderer() {
        let config = ChartConfig {
            role_and_type_renderer: Renderer::Plotly,
            ..Default::default()
        };
        assert!(config.page_kinds().contains(&ChartKind::RoleAndTypeSumPlotly));
        assert!(!config.page_kinds().contains(&ChartKind::RoleAndTypeSum));
        assert!(ChartConfig::default()
            .page_kinds()
            .contains(&ChartKind::RoleAndTypeSum));
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let err = ChartKind::TypeSum
            .render_call("[{\"type__name\": ", None, &ChartConfig::default())
            .unwrap_err();
        match err {
            ChartError::Json { element, .. } => assert_eq!(element, "work-by-type-sum-data"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result = ChartKind::CaregiverRoleSum.render_call(
            r#"[{"type__name": "Cooking", "total_minutes": 5}]"#,
            None,
            &ChartConfig::default(),
        );
        assert!(matches!(result, Err(ChartError::Json { .. })));
    }

    #[test]
    fn test_daily_requires_max() {
        let result = ChartKind::DailySum.render_call("[]", None, &ChartConfig::default());
        assert!(
            matches!(result, Err(ChartError::MissingElement(ref id)) if id == "work-daily-sum-max-data")
        );
    }

    #[test]
    fn test_calendar_year_falls_back_to_default() {
        let call = ChartKind::DailySum
            .render_call("[]", Some("0"), &ChartConfig::default())
            .unwrap();
        let RenderCall::ECharts { options, .. } = call else {
            panic!("daily heatmap renders with ECharts");
        };
        assert_eq!(options["calendar"]["range"], "2022");
    }
}
