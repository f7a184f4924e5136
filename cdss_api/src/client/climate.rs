use super::Client;
use crate::{
    parse,
    query::{endpoint, ClimateStationQuery, ClimateTsQuery, FrostDatesQuery},
    transport::Transport,
    types::{ClimateReading, ClimateReadingKind, ClimateStation, Timescale},
    Error,
};

impl<T: Transport> Client<T> {
    pub fn get_climate_stations(
        &self,
        query: &ClimateStationQuery,
    ) -> Result<Vec<ClimateStation>, Error> {
        self.fetch(&endpoint::CLIMATE_STATIONS, query, parse::climate_station)
    }

    /// Fetches first and last frost dates of one station, one row per year.
    pub fn get_climate_frost_dates(
        &self,
        query: &FrostDatesQuery,
    ) -> Result<Vec<ClimateReading>, Error> {
        self.fetch(&endpoint::CLIMATE_FROST_DATES, query, |raw| {
            parse::climate_reading(raw, ClimateReadingKind::FrostDates)
        })
    }

    /// Fetches a daily or monthly climate series for one parameter.
    pub fn get_climate_ts(&self, query: &ClimateTsQuery) -> Result<Vec<ClimateReading>, Error> {
        let endpoint = query.endpoint()?;
        let kind = match query.timescale {
            Timescale::Month => ClimateReadingKind::Monthly,
            _ => ClimateReadingKind::Daily,
        };
        self.fetch(&endpoint, query, |raw| parse::climate_reading(raw, kind))
    }
}
