use chrono::NaiveDate;

use super::{endpoint, Aoi, Endpoint, Query, QueryPairs};
use crate::{dates::format_year, types::Timescale, Error};

/// Filters for `/surfacewater/surfacewaterstations/`.
#[derive(Debug, Clone, Default)]
pub struct SurfaceWaterStationQuery {
    pub aoi: Option<Aoi>,
    /// Search radius in miles, only used with `aoi`.
    pub radius: Option<f64>,
    pub abbrev: Option<String>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub station_name: Option<String>,
    pub usgs_id: Option<String>,
    pub water_district: Option<i64>,
}

impl Query for SurfaceWaterStationQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let mut builder = endpoint
            .query()
            .param("abbrev", self.abbrev.as_deref())
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("stationName", self.station_name.as_deref())
            .param("usgsSiteId", self.usgs_id.as_deref())
            .param("waterDistrict", self.water_district);
        if self.aoi.is_some() {
            builder = builder
                .aoi(self.aoi.as_ref(), self.radius)
                .set("units", "miles");
        }
        Ok(builder.build())
    }
}

impl SurfaceWaterStationQuery {
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
    pub fn with_station_name(mut self, station_name: &str) -> Self {
        self.station_name = Some(station_name.to_string());
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
}

const SERIES_TIMESCALES: [Timescale; 3] = [Timescale::Day, Timescale::Month, Timescale::Year];

/// Filters for the surface water day, month and water-year series.
#[derive(Debug, Clone, Default)]
pub struct SurfaceWaterTsQuery {
    pub abbrev: Option<String>,
    pub station_number: Option<String>,
    pub usgs_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// `Day`, `Month` or `Year` (water year).
    pub timescale: Timescale,
}

impl SurfaceWaterTsQuery {
    /// The series endpoint for the requested timescale.
    pub fn endpoint(&self) -> Result<Endpoint, Error> {
        match self.timescale.require(&SERIES_TIMESCALES)? {
            Timescale::Day => Ok(endpoint::SW_TS_DAY),
            Timescale::Month => Ok(endpoint::SW_TS_MONTH),
            _ => Ok(endpoint::SW_TS_WATER_YEAR),
        }
    }

    pub fn with_abbrev(mut self, abbrev: &str) -> Self {
        self.abbrev = Some(abbrev.to_string());
        self
    }
    pub fn with_station_number(mut self, station_number: &str) -> Self {
        self.station_number = Some(station_number.to_string());
        self
    }
    pub fn with_usgs_id(mut self, usgs_id: &str) -> Self {
        self.usgs_id = Some(usgs_id.to_string());
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

impl Query for SurfaceWaterTsQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let builder = endpoint
            .query()
            .param("abbrev", self.abbrev.as_deref())
            .param("stationNum", self.station_number.as_deref())
            .param("usgsSiteId", self.usgs_id.as_deref());
        // Daily series filter on dates, aggregates on the year alone.
        let builder = match self.timescale.require(&SERIES_TIMESCALES)? {
            Timescale::Day => builder
                .param("min-measDate", self.start_date)
                .param("max-measDate", self.end_date),
            Timescale::Month => builder
                .param("min-calYear", self.start_date.map(format_year))
                .param("max-calYear", self.end_date.map(format_year)),
            _ => builder
                .param("min-waterYear", self.start_date.map(format_year))
                .param("max-waterYear", self.end_date.map(format_year)),
        };
        Ok(builder.build())
    }
}
