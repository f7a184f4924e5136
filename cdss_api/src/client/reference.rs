use super::Client;
use crate::{
    parse, query::ReferenceTableQuery, transport::Transport, types::ReferenceTable, Error,
};

impl<T: Transport> Client<T> {
    /// Fetches the rows of one reference table.
    pub fn get_reference_table(
        &self,
        query: &ReferenceTableQuery,
    ) -> Result<Vec<ReferenceTable>, Error> {
        self.fetch(&query.endpoint(), query, parse::reference_table)
    }
}
