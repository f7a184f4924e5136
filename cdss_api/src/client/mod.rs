//! HTTP client for the CDSS REST API.

use serde_json::Value;

use crate::{
    config::Config,
    paginate::fetch_all,
    query::{Endpoint, Query},
    transport::{HttpTransport, Transport},
    Error,
};

mod admin_calls;
mod analysis;
mod climate;
mod ground_water;
mod reference;
mod structures;
mod surface_water;
mod telemetry;
mod water_rights;

/// Client for the CDSS REST API.
///
/// Every `get_*` method builds the wire query from its filter struct, pages
/// through the full result set and returns the parsed records. Nothing is
/// retried or cached; a failed page fails the call.
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    config: Config,
}

impl Client<HttpTransport> {
    /// Creates a client for the production API with the default [`Config`].
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self { transport, config })
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(Config::default().with_base_url(base_url))
    }
}

impl<T: Transport> Client<T> {
    /// Runs the client over any transport, e.g. canned pages in tests.
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn fetch<Q, F, M>(&self, endpoint: &Endpoint, query: &Q, build: F) -> Result<Vec<M>, Error>
    where
        Q: Query,
        F: Fn(&Value) -> M,
    {
        let pairs = query.to_query(endpoint)?;
        fetch_all(&self.transport, endpoint.path, pairs, build)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::{
        query::{CallAnalysisWdidQuery, DiversionRecordQuery, QueryPairs, TelemetryTsQuery},
        transport::TransportResponse,
        types::DiversionRecordType,
    };

    /// Answers every request with the same page and records what was asked.
    struct EchoTransport {
        body: serde_json::Value,
        seen: RefCell<Vec<(String, QueryPairs)>>,
    }

    impl EchoTransport {
        fn new(body: serde_json::Value) -> Self {
            Self {
                body,
                seen: RefCell::new(Vec::new()),
            }
        }

        fn value_of(&self, request: usize, key: &str) -> Option<String> {
            self.seen.borrow()[request]
                .1
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    impl Transport for EchoTransport {
        fn get(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse, Error> {
            self.seen.borrow_mut().push((path.to_string(), query.to_vec()));
            Ok(TransportResponse {
                status: 200,
                message: "OK".to_string(),
                body: self.body.to_string(),
            })
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn batched_call_analysis_concatenates_years() {
        let transport = EchoTransport::new(json!({"ResultList": [{"analysisWdid": "0100578"}]}));
        let client = Client::with_transport(transport, Config::default());
        let query = CallAnalysisWdidQuery::new("0100578", "12345.00000")
            .with_start_date(ymd(2019, 5, 1))
            .with_end_date(ymd(2021, 5, 1))
            .with_batch(true);

        let analyses = client.get_call_analysis_wdid(&query).unwrap();
        assert_eq!(analyses.len(), 3);
        assert_eq!(client.transport.seen.borrow().len(), 3);
        assert_eq!(client.transport.value_of(0, "startDate").as_deref(), Some("05-01-2019"));
        assert_eq!(client.transport.value_of(1, "startDate").as_deref(), Some("01-01-2020"));
        assert_eq!(client.transport.value_of(2, "endDate").as_deref(), Some("05-01-2021"));
        assert_eq!(
            client.transport.seen.borrow()[0].0,
            "/analysisservices/callanalysisbywdid/"
        );
    }

    #[test]
    fn telemetry_parameter_defaults_from_config() {
        let transport = EchoTransport::new(json!({"ResultList": []}));
        let config = Config::default().with_default_parameter("GAGE_HT");
        let client = Client::with_transport(transport, config);

        client.get_telemetry_ts(&TelemetryTsQuery::new("PLAKERCO")).unwrap();
        client
            .get_telemetry_ts(&TelemetryTsQuery::new("PLAKERCO").with_parameter("DISCHRG"))
            .unwrap();
        assert_eq!(client.transport.value_of(0, "parameter").as_deref(), Some("GAGE_HT"));
        assert_eq!(client.transport.value_of(1, "parameter").as_deref(), Some("DISCHRG"));
    }

    #[test]
    fn diversion_records_parse_with_requested_type() {
        let transport = EchoTransport::new(json!({"ResultList": [
            {"wdid": "0100578", "dataMeasDate": "2020-03", "dataValue": 41.2}
        ]}));
        let client = Client::with_transport(transport, Config::default());
        let query = DiversionRecordQuery::new("0100578").with_record_type(DiversionRecordType::Month);

        let records = client.get_diversion_records_ts(&query).unwrap();
        assert_eq!(records[0].record_type, DiversionRecordType::Month);
        assert_eq!(records[0].data_value(), Some(41.2));
        assert!(records[0].data_meas_date.is_some());
        assert_eq!(
            client.transport.seen.borrow()[0].0,
            "/structures/divrec/divrecmonth/"
        );
    }

    #[test]
    fn invalid_query_sends_nothing() {
        let transport = EchoTransport::new(json!({"ResultList": []}));
        let client = Client::with_transport(transport, Config::default());
        let query = DiversionRecordQuery::new("0100578")
            .with_record_type(DiversionRecordType::StageVolume);

        assert!(matches!(
            client.get_diversion_records_ts(&query),
            Err(Error::InvalidArgument(_))
        ));
        assert!(client.transport.seen.borrow().is_empty());
    }

    #[test]
    fn inverted_call_analysis_range_sends_nothing() {
        let transport = EchoTransport::new(json!({"ResultList": [{"analysisWdid": "0100578"}]}));
        let client = Client::with_transport(transport, Config::default());
        let query = CallAnalysisWdidQuery::new("0100578", "12345.00000")
            .with_start_date(ymd(2022, 1, 1))
            .with_end_date(ymd(2021, 1, 1))
            .with_batch(true);

        assert!(matches!(
            client.get_call_analysis_wdid(&query),
            Err(Error::InvalidArgument(_))
        ));
        assert!(client.transport.seen.borrow().is_empty());
    }
}
