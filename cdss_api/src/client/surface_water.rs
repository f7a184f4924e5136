use super::Client;
use crate::{
    parse,
    query::{endpoint, SurfaceWaterStationQuery, SurfaceWaterTsQuery},
    transport::Transport,
    types::{Reading, Station},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches surface water stations matching the given query.
    pub fn get_sw_stations(&self, query: &SurfaceWaterStationQuery) -> Result<Vec<Station>, Error> {
        self.fetch(&endpoint::SW_STATIONS, query, parse::station)
    }

    /// Fetches a day, month or water-year surface water series.
    pub fn get_sw_ts(&self, query: &SurfaceWaterTsQuery) -> Result<Vec<Reading>, Error> {
        let endpoint = query.endpoint()?;
        let timescale = query.timescale;
        self.fetch(&endpoint, query, |raw| parse::reading(raw, timescale))
    }
}
