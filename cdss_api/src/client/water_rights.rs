use super::Client;
use crate::{
    parse,
    query::{endpoint, WaterRightQuery},
    transport::Transport,
    types::{WaterRight, WaterRightKind},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches the net decreed amount of each water right.
    pub fn get_water_rights_net_amounts(
        &self,
        query: &WaterRightQuery,
    ) -> Result<Vec<WaterRight>, Error> {
        self.fetch(&endpoint::WATER_RIGHTS_NET_AMOUNT, query, |raw| {
            parse::water_right(raw, WaterRightKind::NetAmount)
        })
    }

    /// Fetches the individual court transactions behind water rights.
    pub fn get_water_rights_transactions(
        &self,
        query: &WaterRightQuery,
    ) -> Result<Vec<WaterRight>, Error> {
        self.fetch(&endpoint::WATER_RIGHTS_TRANSACTION, query, |raw| {
            parse::water_right(raw, WaterRightKind::Transaction)
        })
    }
}
