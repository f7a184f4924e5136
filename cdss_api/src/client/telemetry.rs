use std::borrow::Cow;

use super::Client;
use crate::{
    parse,
    query::{endpoint, TelemetryStationQuery, TelemetryTsQuery},
    transport::Transport,
    types::{Reading, Station},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches telemetry stations, third-party stations included.
    pub fn get_telemetry_stations(
        &self,
        query: &TelemetryStationQuery,
    ) -> Result<Vec<Station>, Error> {
        self.fetch(&endpoint::TELEMETRY_STATIONS, query, parse::station)
    }

    /// Fetches a day, hour or raw telemetry series. Without a parameter the
    /// configured default is requested.
    pub fn get_telemetry_ts(&self, query: &TelemetryTsQuery) -> Result<Vec<Reading>, Error> {
        let endpoint = query.endpoint()?;
        let query = match query.parameter {
            Some(_) => Cow::Borrowed(query),
            None => Cow::Owned(query.clone().with_parameter(&self.config.default_parameter)),
        };
        let timescale = query.timescale;
        self.fetch(&endpoint, query.as_ref(), |raw| parse::reading(raw, timescale))
    }
}
