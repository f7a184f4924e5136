use serde::Serialize;

use super::Metadata;
use crate::coerce::Timestamp;

/// A water administration call placed by a senior right on a stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCall {
    pub call_number: Option<i64>,
    pub call_type: Option<String>,
    pub date_time_set: Option<Timestamp>,
    pub date_time_released: Option<Timestamp>,
    pub water_source_name: Option<String>,
    pub location_wdid: Option<String>,
    pub location_wdid_streammile: Option<f64>,
    pub location_structure_name: Option<String>,
    pub priority_wdid: Option<String>,
    pub priority_structure_name: Option<String>,
    pub priority_admin_number: Option<f64>,
    pub priority_order_number: Option<i64>,
    pub priority_date: Option<Timestamp>,
    pub priority_number: Option<i64>,
    pub bounding_wdid: Option<String>,
    pub bounding_structure_name: Option<String>,
    pub set_comments: Option<String>,
    pub release_comment: Option<String>,
    pub division: Option<i64>,
    pub location_structure_latitude: Option<f64>,
    pub location_structure_longitude: Option<f64>,
    pub bounding_structure_latitude: Option<f64>,
    pub bounding_structure_longitude: Option<f64>,
    pub modified: Option<Timestamp>,
    pub more_information: Option<String>,
    pub metadata: Metadata,
}

impl AdminCall {
    /// A call without a release time is still in effect.
    pub fn is_active(&self) -> bool {
        self.date_time_released.is_none()
    }
}
