use chrono::NaiveDate;

use super::{endpoint, require_id, Aoi, Endpoint, Query, QueryPairs};
use crate::{
    dates::format_year,
    types::{ClimateParameter, Timescale},
    Error,
};

/// Filters for `/climatedata/climatestations/`.
#[derive(Debug, Clone, Default)]
pub struct ClimateStationQuery {
    pub aoi: Option<Aoi>,
    pub radius: Option<f64>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub station_name: Option<String>,
    pub site_id: Option<String>,
    pub water_district: Option<i64>,
}

impl Query for ClimateStationQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("units", "miles")
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("stationName", self.station_name.as_deref())
            .param("siteId", self.site_id.as_deref())
            .param("waterDistrict", self.water_district)
            .aoi(self.aoi.as_ref(), self.radius)
            .build())
    }
}

impl ClimateStationQuery {
    pub fn with_aoi(mut self, aoi: Aoi) -> Self {
        self.aoi = Some(aoi);
        self
    }
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
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
    pub fn with_station_name(mut self, station_name: &str) -> Self {
        self.station_name = Some(station_name.to_string());
        self
    }
    pub fn with_site_id(mut self, site_id: &str) -> Self {
        self.site_id = Some(site_id.to_string());
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
}

/// Filters for `/climatedata/climatestationfrostdates/`. Only the years of
/// the dates are sent.
#[derive(Debug, Clone)]
pub struct FrostDatesQuery {
    pub station_number: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FrostDatesQuery {
    pub fn new(station_number: &str) -> Self {
        Self {
            station_number: station_number.to_string(),
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

impl Query for FrostDatesQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("stationNum", require_id("station number", &self.station_number)?)
            .param("min-calYear", self.start_date.map(format_year))
            .param("max-calYear", self.end_date.map(format_year))
            .build())
    }
}

const SERIES_TIMESCALES: [Timescale; 2] = [Timescale::Day, Timescale::Month];

/// Filters for the daily and monthly climate series of one parameter.
#[derive(Debug, Clone)]
pub struct ClimateTsQuery {
    pub parameter: ClimateParameter,
    pub station_number: Option<String>,
    pub site_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub timescale: Timescale,
}

impl ClimateTsQuery {
    pub fn new(parameter: ClimateParameter) -> Self {
        Self {
            parameter,
            station_number: None,
            site_id: None,
            start_date: None,
            end_date: None,
            timescale: Timescale::Day,
        }
    }

    pub fn endpoint(&self) -> Result<Endpoint, Error> {
        match self.timescale.require(&SERIES_TIMESCALES)? {
            Timescale::Month => Ok(endpoint::CLIMATE_TS_MONTH),
            _ => Ok(endpoint::CLIMATE_TS_DAY),
        }
    }

    pub fn with_station_number(mut self, station_number: &str) -> Self {
        self.station_number = Some(station_number.to_string());
        self
    }
    pub fn with_site_id(mut self, site_id: &str) -> Self {
        self.site_id = Some(site_id.to_string());
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
}

impl Query for ClimateTsQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let builder = endpoint
            .query()
            .set("measType", self.parameter.as_str())
            .param("stationNum", self.station_number.as_deref())
            .param("siteId", self.site_id.as_deref());
        let builder = match self.timescale.require(&SERIES_TIMESCALES)? {
            Timescale::Month => builder
                .param("min-calYear", self.start_date.map(format_year))
                .param("max-calYear", self.end_date.map(format_year)),
            _ => builder
                .param("min-measDate", self.start_date)
                .param("max-measDate", self.end_date),
        };
        Ok(builder.build())
    }
}
