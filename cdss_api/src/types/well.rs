use serde::Serialize;

use super::Metadata;
use crate::coerce::Timestamp;

/// A groundwater well. `depth` and `elevation` are only reported for
/// geophysical log wells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Well {
    pub well_id: Option<String>,
    pub well_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_accuracy: Option<String>,
    pub county: Option<String>,
    pub designated_basin: Option<String>,
    pub management_district: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub depth: Option<f64>,
    pub elevation: Option<f64>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}

/// A single water level measurement taken at a well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellMeasurement {
    pub well_id: Option<String>,
    pub well_name: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub county: Option<String>,
    pub management_district: Option<String>,
    pub designated_basin: Option<String>,
    pub publication: Option<String>,
    pub measurement_date: Option<Timestamp>,
    pub depth_to_water: Option<f64>,
    pub measuring_point_above_land_surface: Option<f64>,
    pub depth_water_below_land_surface: Option<f64>,
    pub elevation_of_water: Option<f64>,
    pub delta: Option<f64>,
    pub published: Option<String>,
    pub data_source: Option<String>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}

/// A formation pick from a geophysical log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogPick {
    pub well_id: Option<String>,
    /// Depth of the pick below land surface, in feet.
    pub pick_depth: Option<f64>,
    pub formation: Option<String>,
    pub member: Option<String>,
    pub pick_quality: Option<String>,
    pub comments: Option<String>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}
