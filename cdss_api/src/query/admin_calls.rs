use chrono::NaiveDate;

use super::{endpoint, Endpoint, Query, QueryPairs};
use crate::Error;

/// Filters for the active and historical administrative call listings.
/// The dates bound when the call was set.
#[derive(Debug, Clone)]
pub struct AdminCallQuery {
    pub division: Option<i64>,
    pub location_wdid: Option<String>,
    pub call_number: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Active calls when `true` (the default), released ones otherwise.
    pub active: bool,
}

impl Default for AdminCallQuery {
    fn default() -> Self {
        Self {
            division: None,
            location_wdid: None,
            call_number: None,
            start_date: None,
            end_date: None,
            active: true,
        }
    }
}

impl AdminCallQuery {
    pub fn endpoint(&self) -> Endpoint {
        if self.active {
            endpoint::ADMIN_CALLS_ACTIVE
        } else {
            endpoint::ADMIN_CALLS_HISTORICAL
        }
    }

    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_location_wdid(mut self, location_wdid: &str) -> Self {
        self.location_wdid = Some(location_wdid.to_string());
        self
    }
    pub fn with_call_number(mut self, call_number: i64) -> Self {
        self.call_number = Some(call_number);
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
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Query for AdminCallQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .param("division", self.division)
            .param("callNumber", self.call_number)
            .param("min-dateTimeSet", self.start_date)
            .param("max-dateTimeSet", self.end_date)
            .param("locationWdid", self.location_wdid.as_deref())
            .build())
    }
}
