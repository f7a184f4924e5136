use std::str::FromStr;

use serde::Serialize;

use super::Metadata;
use crate::{coerce::Timestamp, Error};

/// How a call analysis was keyed: by structure or by stream location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallAnalysisKind {
    Wdid,
    Gnis,
}

impl FromStr for CallAnalysisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wdid" => Ok(CallAnalysisKind::Wdid),
            "gnis" | "gnisid" | "gnis_id" => Ok(CallAnalysisKind::Gnis),
            _ => Err(Error::invalid(format!(
                "unknown call analysis type '{}'. Valid values: wdid, gnis",
                s
            ))),
        }
    }
}

/// Daily out-of-priority analysis for one water right against the calls
/// placed downstream of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallAnalysis {
    pub kind: CallAnalysisKind,
    pub analysis_date: Option<Timestamp>,
    pub wdid: Option<String>,
    pub gnis_id: Option<String>,
    pub stream_mile: Option<f64>,
    pub admin_number: Option<f64>,
    pub percent_time_out_of_priority: Option<f64>,
    pub downstream_call_wdid: Option<String>,
    pub downstream_call_right: Option<String>,
    pub downstream_call_stream_mile: Option<f64>,
    pub downstream_call_admin_number: Option<f64>,
    pub downstream_call_decreed_amount: Option<f64>,
    pub downstream_call_decreed_unit: Option<String>,
    pub downstream_call_appropriation_date: Option<Timestamp>,
    pub downstream_call_status: Option<String>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}

/// A stream segment in the water source route framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRoute {
    pub gnis_id: Option<String>,
    pub gnis_name: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub stream_length: Option<f64>,
    pub tributary_to_level: Option<i64>,
    pub tributary_to_gnis_id: Option<String>,
    pub tributary_gnis_name: Option<String>,
    pub tributary_to_stream_mile: Option<f64>,
    pub metadata: Metadata,
}

/// A structure found along a route between two stream locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnalysis {
    pub wdid: Option<String>,
    pub structure_name: Option<String>,
    pub stream_mile: Option<f64>,
    pub structure_type: Option<String>,
    pub decreed_amount: Option<f64>,
    pub decreed_unit: Option<String>,
    pub appropriation_date: Option<Timestamp>,
    pub admin_number: Option<f64>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}
