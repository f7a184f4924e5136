use super::Client;
use crate::{parse, query::AdminCallQuery, transport::Transport, types::AdminCall, Error};

impl<T: Transport> Client<T> {
    /// Fetches active or historical administrative calls, depending on
    /// `query.active`.
    pub fn get_admin_calls(&self, query: &AdminCallQuery) -> Result<Vec<AdminCall>, Error> {
        self.fetch(&query.endpoint(), query, parse::admin_call)
    }
}
