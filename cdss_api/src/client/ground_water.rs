use super::Client;
use crate::{
    parse,
    query::{endpoint, LogPickQuery, WellMeasurementQuery, WellQuery},
    transport::Transport,
    types::{LogPick, Well, WellMeasurement},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches wells that carry water-level measurements.
    pub fn get_water_level_wells(&self, query: &WellQuery) -> Result<Vec<Well>, Error> {
        self.fetch(&endpoint::WATER_LEVEL_WELLS, query, parse::well)
    }

    pub fn get_well_measurements(
        &self,
        query: &WellMeasurementQuery,
    ) -> Result<Vec<WellMeasurement>, Error> {
        self.fetch(&endpoint::WELL_MEASUREMENTS, query, parse::well_measurement)
    }

    /// Fetches wells with geophysical logs, including total depth and
    /// ground elevation.
    pub fn get_geophysical_log_wells(&self, query: &WellQuery) -> Result<Vec<Well>, Error> {
        self.fetch(&endpoint::GEOPHYSICAL_LOG_WELLS, query, parse::geophysical_well)
    }

    pub fn get_geophysical_log_picks(&self, query: &LogPickQuery) -> Result<Vec<LogPick>, Error> {
        self.fetch(&endpoint::GEOPHYSICAL_LOG_PICKS, query, parse::log_pick)
    }
}
