use std::str::FromStr;

use serde::Serialize;

use super::Metadata;
use crate::{coerce::Timestamp, Error};

/// Temporal aggregation a reading was requested at. It decides which field
/// group a [`Reading`] carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timescale {
    #[default]
    Day,
    Month,
    Year,
    Raw,
    Hour,
}

/// Spellings of the water year, accepted only by series kept per water year.
const WATER_YEAR_ALIASES: &[&str] = &[
    "wyear",
    "wyears",
    "water_year",
    "water_years",
    "wateryear",
    "wateryears",
    "wy",
];

impl Timescale {
    /// Fails with `InvalidArgument` unless `self` is one of `allowed`.
    pub fn require(self, allowed: &[Timescale]) -> Result<Self, Error> {
        if allowed.contains(&self) {
            return Ok(self);
        }
        let valid = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(Error::invalid(format!(
            "timescale '{}' is not supported here. Valid values: {}",
            self, valid
        )))
    }

    /// Parses a timescale for a series aggregated by water year (surface
    /// water). On top of the usual tokens this takes `wy`, `water_year` and
    /// their variants as [`Timescale::Year`].
    pub fn parse_water_year(s: &str) -> Result<Self, Error> {
        if WATER_YEAR_ALIASES.contains(&s.trim().to_lowercase().as_str()) {
            return Ok(Timescale::Year);
        }
        s.parse()
    }
}

impl std::fmt::Display for Timescale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Timescale::Day => "day",
                Timescale::Month => "month",
                Timescale::Year => "year",
                Timescale::Raw => "raw",
                Timescale::Hour => "hour",
            }
        )
    }
}

impl FromStr for Timescale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" | "daily" | "d" => Ok(Timescale::Day),
            "month" | "months" | "monthly" | "mon" | "m" => Ok(Timescale::Month),
            "year" | "years" | "yearly" | "annual" | "annually" | "yr" | "y" => Ok(Timescale::Year),
            "raw" => Ok(Timescale::Raw),
            "hour" | "hours" | "hourly" => Ok(Timescale::Hour),
            _ => Err(Error::invalid(format!(
                "unknown timescale '{}'. Valid values: day, month, year, raw, hour",
                s
            ))),
        }
    }
}

/// Quality flags reported with daily values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayFlags {
    pub flag_a: Option<String>,
    pub flag_b: Option<String>,
    pub flag_c: Option<String>,
    pub flag_d: Option<String>,
}

/// Quality flags reported with raw and hourly telemetry values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawFlags {
    pub flag_a: Option<String>,
    pub flag_b: Option<String>,
}

/// Flow summary for monthly and water-year aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowStatistics {
    pub min_q_cfs: Option<f64>,
    pub max_q_cfs: Option<f64>,
    pub avg_q_cfs: Option<f64>,
    pub total_q_af: Option<f64>,
}

/// The timescale-specific part of a reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadingValues {
    Day {
        value: Option<f64>,
        flags: DayFlags,
    },
    Month {
        cal_year: Option<i64>,
        cal_month_num: Option<i64>,
        flow: FlowStatistics,
    },
    Year {
        water_year: Option<i64>,
        flow: FlowStatistics,
    },
    /// Raw and hourly telemetry.
    Raw { flags: RawFlags },
}

/// A surface water or telemetry time series value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub timescale: Timescale,
    pub station_num: Option<String>,
    pub abbrev: Option<String>,
    pub parameter: Option<String>,
    pub usgs_site_id: Option<String>,
    pub meas_type: Option<String>,
    pub meas_unit: Option<String>,
    pub meas_count: Option<i64>,
    pub meas_value: Option<f64>,
    pub meas_date: Option<Timestamp>,
    pub meas_date_time: Option<Timestamp>,
    pub data_source: Option<String>,
    pub modified: Option<Timestamp>,
    pub values: ReadingValues,
    pub metadata: Metadata,
}

impl Reading {
    /// Daily value; `None` for every other timescale.
    pub fn value(&self) -> Option<f64> {
        match &self.values {
            ReadingValues::Day { value, .. } => *value,
            _ => None,
        }
    }

    pub fn day_flags(&self) -> Option<&DayFlags> {
        match &self.values {
            ReadingValues::Day { flags, .. } => Some(flags),
            _ => None,
        }
    }

    pub fn raw_flags(&self) -> Option<&RawFlags> {
        match &self.values {
            ReadingValues::Raw { flags } => Some(flags),
            _ => None,
        }
    }

    pub fn cal_year(&self) -> Option<i64> {
        match &self.values {
            ReadingValues::Month { cal_year, .. } => *cal_year,
            _ => None,
        }
    }

    pub fn cal_month_num(&self) -> Option<i64> {
        match &self.values {
            ReadingValues::Month { cal_month_num, .. } => *cal_month_num,
            _ => None,
        }
    }

    pub fn water_year(&self) -> Option<i64> {
        match &self.values {
            ReadingValues::Year { water_year, .. } => *water_year,
            _ => None,
        }
    }

    /// Flow statistics of monthly and water-year readings.
    pub fn flow(&self) -> Option<&FlowStatistics> {
        match &self.values {
            ReadingValues::Month { flow, .. } | ReadingValues::Year { flow, .. } => Some(flow),
            _ => None,
        }
    }

    pub fn min_q_cfs(&self) -> Option<f64> {
        self.flow().and_then(|f| f.min_q_cfs)
    }

    pub fn max_q_cfs(&self) -> Option<f64> {
        self.flow().and_then(|f| f.max_q_cfs)
    }

    pub fn avg_q_cfs(&self) -> Option<f64> {
        self.flow().and_then(|f| f.avg_q_cfs)
    }

    pub fn total_q_af(&self) -> Option<f64> {
        self.flow().and_then(|f| f.total_q_af)
    }
}

/// Climate measurement types accepted by the climate time series endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClimateParameter {
    Evap,
    FrostDate,
    MaxTemp,
    MeanTemp,
    MinTemp,
    Precip,
    Snow,
    SnowDepth,
    #[serde(rename = "SnowSWE")]
    SnowSwe,
    Solar,
    #[serde(rename = "VP")]
    Vp,
    Wind,
}

impl ClimateParameter {
    pub const ALL: [ClimateParameter; 12] = [
        ClimateParameter::Evap,
        ClimateParameter::FrostDate,
        ClimateParameter::MaxTemp,
        ClimateParameter::MeanTemp,
        ClimateParameter::MinTemp,
        ClimateParameter::Precip,
        ClimateParameter::Snow,
        ClimateParameter::SnowDepth,
        ClimateParameter::SnowSwe,
        ClimateParameter::Solar,
        ClimateParameter::Vp,
        ClimateParameter::Wind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateParameter::Evap => "Evap",
            ClimateParameter::FrostDate => "FrostDate",
            ClimateParameter::MaxTemp => "MaxTemp",
            ClimateParameter::MeanTemp => "MeanTemp",
            ClimateParameter::MinTemp => "MinTemp",
            ClimateParameter::Precip => "Precip",
            ClimateParameter::Snow => "Snow",
            ClimateParameter::SnowDepth => "SnowDepth",
            ClimateParameter::SnowSwe => "SnowSWE",
            ClimateParameter::Solar => "Solar",
            ClimateParameter::Vp => "VP",
            ClimateParameter::Wind => "Wind",
        }
    }
}

impl std::fmt::Display for ClimateParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimateParameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid = Self::ALL.map(|p| p.as_str()).join(", ");
                Error::invalid(format!(
                    "unknown climate parameter '{}'. Valid values: {}",
                    s, valid
                ))
            })
    }
}

/// Which climate endpoint a [`ClimateReading`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateReadingKind {
    FrostDates,
    Daily,
    Monthly,
}

/// The endpoint-specific part of a climate reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClimateValues {
    FrostDates {
        cal_year: Option<i64>,
        spring_frost_date: Option<Timestamp>,
        fall_frost_date: Option<Timestamp>,
        frost_date_28f_spring: Option<Timestamp>,
        frost_date_28f_fall: Option<Timestamp>,
        frost_date_32f_spring: Option<Timestamp>,
        frost_date_32f_fall: Option<Timestamp>,
    },
    Daily {
        meas_date: Option<Timestamp>,
        value: Option<f64>,
        flag: Option<String>,
        units: Option<String>,
    },
    Monthly {
        cal_year: Option<i64>,
        cal_month: Option<i64>,
        value: Option<f64>,
        flag: Option<String>,
        units: Option<String>,
    },
}

/// A climate station measurement or frost-date summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateReading {
    pub station_number: Option<String>,
    pub site_id: Option<String>,
    pub parameter: Option<String>,
    pub data_source: Option<String>,
    pub modified: Option<Timestamp>,
    pub values: ClimateValues,
    pub metadata: Metadata,
}

impl ClimateReading {
    pub fn value(&self) -> Option<f64> {
        match &self.values {
            ClimateValues::Daily { value, .. } | ClimateValues::Monthly { value, .. } => *value,
            ClimateValues::FrostDates { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timescale_aliases() {
        for token in ["day", "Days", "daily", "d"] {
            assert_eq!(token.parse::<Timescale>().unwrap(), Timescale::Day);
        }
        for token in ["month", "mon", "m", "MONTHLY"] {
            assert_eq!(token.parse::<Timescale>().unwrap(), Timescale::Month);
        }
        for token in ["year", "annual", "y", "YR"] {
            assert_eq!(token.parse::<Timescale>().unwrap(), Timescale::Year);
        }
        assert_eq!("raw".parse::<Timescale>().unwrap(), Timescale::Raw);
        assert_eq!("hour".parse::<Timescale>().unwrap(), Timescale::Hour);
    }

    #[test]
    fn water_year_aliases_need_a_water_year_series() {
        for token in ["wy", "Water_Year", "wateryears", "wyear"] {
            assert!(matches!(token.parse::<Timescale>(), Err(Error::InvalidArgument(_))));
            assert_eq!(Timescale::parse_water_year(token).unwrap(), Timescale::Year);
        }
        assert_eq!(Timescale::parse_water_year("daily").unwrap(), Timescale::Day);
        assert!(Timescale::parse_water_year("fortnight").is_err());
    }

    #[test]
    fn unknown_timescale_is_invalid_argument() {
        let err = "fortnight".parse::<Timescale>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn require_restricts_timescales() {
        let telemetry = [Timescale::Day, Timescale::Hour, Timescale::Raw];
        assert!(Timescale::Hour.require(&telemetry).is_ok());
        assert!(matches!(
            Timescale::Month.require(&telemetry),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn climate_parameter_is_case_insensitive() {
        assert_eq!(
            "snowswe".parse::<ClimateParameter>().unwrap(),
            ClimateParameter::SnowSwe
        );
        assert_eq!(ClimateParameter::SnowSwe.to_string(), "SnowSWE");
        assert!("Humidity".parse::<ClimateParameter>().is_err());
    }
}
