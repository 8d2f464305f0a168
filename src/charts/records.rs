//! Payload records embedded in the analytics page.
//!
//! Field names match the JSON the server emits, including the
//! double-underscore lookups (`caregiver_role__name`, `type__name`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaregiverRoleSummary {
    #[serde(rename = "caregiver_role__name")]
    pub caregiver_role: String,
    pub total_minutes: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleAndTypeSummary {
    pub role_name: String,
    pub work_type: String,
    pub total_minutes: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    #[serde(rename = "type__name")]
    pub work_type: String,
    pub total_minutes: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_minutes: f64,
}

/// Year of the latest day in the payload
pub fn latest_year(days: &[DailySummary]) -> Option<i32> {
    use chrono::Datelike;

    days.iter().map(|d| d.date).max().map(|date| date.year())
}
