use serde::Serialize;

use super::Metadata;
use crate::coerce::Timestamp;

/// A surface water or telemetry gaging station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub station_num: Option<String>,
    pub abbrev: Option<String>,
    pub usgs_site_id: Option<String>,
    pub name: Option<String>,
    /// Agency or data source operating the station.
    pub agency: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utm_x: Option<f64>,
    pub utm_y: Option<f64>,
    pub location_accuracy: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub more_information: Option<String>,
    pub meas_unit: Option<String>,
    pub metadata: Metadata,
}

/// A climate station (NOAA, CoAgMET and similar networks).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateStation {
    pub station_number: Option<String>,
    pub station_name: Option<String>,
    pub site_id: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utm_x: Option<f64>,
    pub utm_y: Option<f64>,
    pub elevation: Option<f64>,
    pub data_source: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub more_information: Option<String>,
    pub parameter_types: Vec<String>,
    pub metadata: Metadata,
}
