use std::str::FromStr;

use serde::Serialize;

use super::{Metadata, Timescale};
use crate::{coerce::Timestamp, Error};

/// A physical water structure (ditch, reservoir, well field...) keyed by WDID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    pub wdid: Option<String>,
    pub structure_name: Option<String>,
    pub structure_type: Option<String>,
    pub water_source: Option<String>,
    pub location_wdid: Option<String>,
    pub gnis_id: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub county: Option<String>,
    pub designated_basin: Option<String>,
    pub management_district: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utm_x: Option<f64>,
    pub utm_y: Option<f64>,
    pub stream_num: Option<String>,
    pub structure_num: Option<String>,
    pub ciu_code: Option<String>,
    pub ciucode_desc: Option<String>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}

/// Which diversion record series a [`DiversionRecord`] belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiversionRecordType {
    #[default]
    Day,
    Month,
    Year,
    StageVolume,
}

impl TryFrom<Timescale> for DiversionRecordType {
    type Error = Error;

    fn try_from(timescale: Timescale) -> Result<Self, Self::Error> {
        match timescale {
            Timescale::Day => Ok(DiversionRecordType::Day),
            Timescale::Month => Ok(DiversionRecordType::Month),
            Timescale::Year => Ok(DiversionRecordType::Year),
            other => Err(Error::invalid(format!(
                "timescale '{}' has no diversion records. Valid values: day, month, year",
                other
            ))),
        }
    }
}

impl FromStr for DiversionRecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stage_volume" | "stagevolume" | "stage-volume" => Ok(DiversionRecordType::StageVolume),
            other => other.parse::<Timescale>()?.try_into(),
        }
    }
}

/// The series-specific part of a diversion record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiversionValues {
    /// Day, month and year diversion or release totals.
    Diversion {
        water_class_num: Option<i64>,
        wc_identifier: Option<String>,
        meas_interval: Option<String>,
        meas_count: Option<i64>,
        data_value: Option<f64>,
        meas_units: Option<String>,
        obs_code: Option<String>,
        approval_status: Option<String>,
    },
    /// Reservoir stage/volume observations.
    StageVolume {
        stage: Option<f64>,
        volume: Option<f64>,
    },
}

/// A diversion, release or stage-volume observation for a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversionRecord {
    pub record_type: DiversionRecordType,
    pub wdid: Option<String>,
    /// Start of the measured period. Month and year series report only
    /// `YYYY-MM` / `YYYY`, which is normalised to the first instant.
    pub data_meas_date: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub values: DiversionValues,
    pub metadata: Metadata,
}

impl DiversionRecord {
    pub fn data_value(&self) -> Option<f64> {
        match &self.values {
            DiversionValues::Diversion { data_value, .. } => *data_value,
            DiversionValues::StageVolume { .. } => None,
        }
    }
}

/// A water class (source/use/type combination) recorded at a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterClass {
    pub wdid: Option<String>,
    pub wc_identifier: Option<String>,
    pub por_start: Option<Timestamp>,
    pub por_end: Option<Timestamp>,
    pub div_type: Option<String>,
    pub timestep: Option<String>,
    pub units: Option<String>,
    pub source_code: Option<String>,
    pub use_code: Option<String>,
    pub op_code: Option<String>,
    pub modified: Option<Timestamp>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_tokens() {
        assert_eq!(
            "daily".parse::<DiversionRecordType>().unwrap(),
            DiversionRecordType::Day
        );
        assert_eq!(
            "stage_volume".parse::<DiversionRecordType>().unwrap(),
            DiversionRecordType::StageVolume
        );
        assert!(matches!(
            "raw".parse::<DiversionRecordType>(),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(
            "annual".parse::<DiversionRecordType>().unwrap(),
            DiversionRecordType::Year
        );
        assert!(matches!(
            "wy".parse::<DiversionRecordType>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
