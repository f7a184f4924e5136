use chrono::NaiveDate;

use super::{require_id, Endpoint, Query, QueryPairs};
use crate::Error;

/// Filters shared by the water-level and geophysical-log well listings.
/// Name filters are sent uppercased with `+` for spaces.
#[derive(Debug, Clone, Default)]
pub struct WellQuery {
    pub county: Option<String>,
    pub designated_basin: Option<String>,
    pub division: Option<i64>,
    pub management_district: Option<String>,
    pub water_district: Option<i64>,
    pub well_id: Option<String>,
}

impl Query for WellQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .plus_spaced("county", self.county.as_deref())
            .plus_spaced("designatedBasin", self.designated_basin.as_deref())
            .param("division", self.division)
            .plus_spaced("managementDistrict", self.management_district.as_deref())
            .param("waterDistrict", self.water_district)
            .param("wellId", self.well_id.as_deref())
            .build())
    }
}

impl WellQuery {
    pub fn with_county(mut self, county: &str) -> Self {
        self.county = Some(county.to_string());
        self
    }
    pub fn with_designated_basin(mut self, designated_basin: &str) -> Self {
        self.designated_basin = Some(designated_basin.to_string());
        self
    }
    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_management_district(mut self, management_district: &str) -> Self {
        self.management_district = Some(management_district.to_string());
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_well_id(mut self, well_id: &str) -> Self {
        self.well_id = Some(well_id.to_string());
        self
    }
}

/// Filters for `/groundwater/waterlevels/wellmeasurements/`.
#[derive(Debug, Clone)]
pub struct WellMeasurementQuery {
    pub well_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WellMeasurementQuery {
    pub fn new(well_id: &str) -> Self {
        Self {
            well_id: well_id.to_string(),
            start_date: None,
            end_date: None,
        }
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

impl Query for WellMeasurementQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("wellId", require_id("well id", &self.well_id)?)
            .param("min-measurementDate", self.start_date)
            .param("max-measurementDate", self.end_date)
            .build())
    }
}

/// Filters for `/groundwater/geophysicallogs/geoplogpicks/`.
#[derive(Debug, Clone)]
pub struct LogPickQuery {
    pub well_id: String,
}

impl LogPickQuery {
    pub fn new(well_id: &str) -> Self {
        Self {
            well_id: well_id.to_string(),
        }
    }
}

impl Query for LogPickQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("wellId", require_id("well id", &self.well_id)?)
            .build())
    }
}
