use chrono::NaiveDate;

use super::{endpoint, require_id, Aoi, Endpoint, Query, QueryPairs};
use crate::{types::Timescale, Error};

/// Filters for `/telemetrystations/telemetrystation/`. Third-party stations
/// are always included.
#[derive(Debug, Clone, Default)]
pub struct TelemetryStationQuery {
    pub aoi: Option<Aoi>,
    pub radius: Option<f64>,
    pub abbrev: Option<String>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub gnis_id: Option<String>,
    pub usgs_id: Option<String>,
    pub water_district: Option<i64>,
    pub wdid: Option<String>,
}

impl Query for TelemetryStationQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let mut builder = endpoint
            .query()
            .set("includeThirdParty", true)
            .param("abbrev", self.abbrev.as_deref())
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("gnisId", self.gnis_id.as_deref())
            .param("usgsStationId", self.usgs_id.as_deref())
            .param("waterDistrict", self.water_district)
            .param("wdid", self.wdid.as_deref());
        if self.aoi.is_some() {
            builder = builder
                .aoi(self.aoi.as_ref(), self.radius)
                .set("units", "miles");
        }
        Ok(builder.build())
    }
}

impl TelemetryStationQuery {
    pub fn with_aoi(mut self, aoi: Aoi) -> Self {
        self.aoi = Some(aoi);
        self
    }
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn with_abbrev(mut self, abbrev: &str) -> Self {
        self.abbrev = Some(abbrev.to_string());
        self
    }
    pub fn with_county(mut self, county: &str) -> Self {
        self.county = Some(county.to_string());
        self
    }
    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_gnis_id(mut self, gnis_id: &str) -> Self {
        self.gnis_id = Some(gnis_id.to_string());
        self
    }
    pub fn with_usgs_id(mut self, usgs_id: &str) -> Self {
        self.usgs_id = Some(usgs_id.to_string());
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_wdid(mut self, wdid: &str) -> Self {
        self.wdid = Some(wdid.to_string());
        self
    }
}

const SERIES_TIMESCALES: [Timescale; 3] = [Timescale::Day, Timescale::Hour, Timescale::Raw];

/// Filters for the telemetry day, hour and raw series of one station.
#[derive(Debug, Clone)]
pub struct TelemetryTsQuery {
    /// Station abbreviation, required.
    pub abbrev: String,
    /// Measured parameter; the client's configured default when `None`.
    pub parameter: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub timescale: Timescale,
    pub include_third_party: bool,
}

impl TelemetryTsQuery {
    pub fn new(abbrev: &str) -> Self {
        Self {
            abbrev: abbrev.to_string(),
            parameter: None,
            start_date: None,
            end_date: None,
            timescale: Timescale::Day,
            include_third_party: true,
        }
    }

    pub fn endpoint(&self) -> Result<Endpoint, Error> {
        match self.timescale.require(&SERIES_TIMESCALES)? {
            Timescale::Hour => Ok(endpoint::TELEMETRY_TS_HOUR),
            Timescale::Raw => Ok(endpoint::TELEMETRY_TS_RAW),
            _ => Ok(endpoint::TELEMETRY_TS_DAY),
        }
    }

    pub fn with_parameter(mut self, parameter: &str) -> Self {
        self.parameter = Some(parameter.to_string());
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
    pub fn with_timescale(mut self, timescale: Timescale) -> Self {
        self.timescale = timescale;
        self
    }
    pub fn with_include_third_party(mut self, include_third_party: bool) -> Self {
        self.include_third_party = include_third_party;
        self
    }
}

impl Query for TelemetryTsQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        self.timescale.require(&SERIES_TIMESCALES)?;
        let builder = endpoint
            .query()
            .set("abbrev", require_id("abbrev", &self.abbrev)?)
            .param("parameter", self.parameter.as_deref())
            .set("includeThirdParty", self.include_third_party)
            .param("startDate", self.start_date)
            .param("endDate", self.end_date);
        Ok(builder.build())
    }
}
