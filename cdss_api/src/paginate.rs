//! Pages through a result set until the server returns a short page.

use std::marker::PhantomData;

use serde_json::Value;

use crate::{parse::parse_collection, query::QueryPairs, transport::Transport, Error};

/// Records requested per page, the API's maximum.
pub const PAGE_SIZE: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// The next request asks for page `index` (1-based).
    Paging { index: u32 },
    Done,
}

/// Iterator over the parsed pages of one endpoint.
///
/// An empty page ends iteration without yielding; a page shorter than
/// [`PAGE_SIZE`] is yielded and ends it. A result set that is an exact
/// multiple of the page size costs one extra, empty request. An error is
/// yielded once and ends iteration.
pub struct Pages<'a, T: ?Sized, F, M> {
    transport: &'a T,
    path: &'a str,
    query: QueryPairs,
    build: F,
    state: PageState,
    _record: PhantomData<fn() -> M>,
}

impl<'a, T, F, M> Pages<'a, T, F, M>
where
    T: Transport + ?Sized,
    F: Fn(&Value) -> M,
{
    pub fn new(transport: &'a T, path: &'a str, query: QueryPairs, build: F) -> Self {
        Self {
            transport,
            path,
            query,
            build,
            state: PageState::Paging { index: 1 },
            _record: PhantomData,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    fn fetch(&self, index: u32) -> Result<Vec<M>, Error> {
        let mut query: QueryPairs = self
            .query
            .iter()
            .filter(|(key, _)| key != "pageSize" && key != "pageIndex")
            .cloned()
            .collect();
        query.push(("pageSize".to_string(), PAGE_SIZE.to_string()));
        query.push(("pageIndex".to_string(), index.to_string()));

        let response = self.transport.get(self.path, &query)?;
        if !response.is_success() {
            return Err(Error::Api {
                status: response.status,
                message: response.message,
            });
        }
        let body = response.json()?;
        let records = parse_collection(&body, &self.build);
        tracing::debug!(path = self.path, page = index, records = records.len(), "Fetched page");
        Ok(records)
    }
}

impl<'a, T, F, M> Iterator for Pages<'a, T, F, M>
where
    T: Transport + ?Sized,
    F: Fn(&Value) -> M,
{
    type Item = Result<Vec<M>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let PageState::Paging { index } = self.state else {
            return None;
        };
        match self.fetch(index) {
            Ok(records) if records.is_empty() => {
                self.state = PageState::Done;
                None
            }
            Ok(records) => {
                self.state = if records.len() < PAGE_SIZE {
                    PageState::Done
                } else {
                    PageState::Paging { index: index + 1 }
                };
                Some(Ok(records))
            }
            Err(e) => {
                self.state = PageState::Done;
                Some(Err(e))
            }
        }
    }
}

/// Fetches every page and concatenates the records. Any failed page fails
/// the whole call and nothing accumulated so far is returned.
pub fn fetch_all<T, F, M>(
    transport: &T,
    path: &str,
    query: QueryPairs,
    build: F,
) -> Result<Vec<M>, Error>
where
    T: Transport + ?Sized,
    F: Fn(&Value) -> M,
{
    let mut records = Vec::new();
    for page in Pages::new(transport, path, query, build) {
        records.extend(page?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::transport::TransportResponse;

    /// Serves one canned response per request and records each query.
    struct FakeTransport {
        responses: RefCell<Vec<TransportResponse>>,
        seen: RefCell<Vec<QueryPairs>>,
    }

    impl FakeTransport {
        fn with_page_sizes(sizes: &[usize]) -> Self {
            let responses = sizes
                .iter()
                .map(|&n| ok(json!({ "ResultList": vec![json!({"wdid": "0100578"}); n] })))
                .collect();
            Self::new(responses)
        }

        fn new(responses: Vec<TransportResponse>) -> Self {
            Self {
                responses: RefCell::new(responses),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn page_indexes(&self) -> Vec<String> {
            self.seen
                .borrow()
                .iter()
                .filter_map(|q| q.iter().find(|(k, _)| k == "pageIndex").map(|(_, v)| v.clone()))
                .collect()
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, _path: &str, query: &[(String, String)]) -> Result<TransportResponse, Error> {
            self.seen.borrow_mut().push(query.to_vec());
            let mut responses = self.responses.borrow_mut();
            assert!(!responses.is_empty(), "unexpected extra request");
            Ok(responses.remove(0))
        }
    }

    fn ok(body: Value) -> TransportResponse {
        TransportResponse {
            status: 200,
            message: "OK".to_string(),
            body: body.to_string(),
        }
    }

    fn base_query() -> QueryPairs {
        vec![("format".to_string(), "json".to_string())]
    }

    #[test]
    fn pages_until_short_page() {
        let transport = FakeTransport::with_page_sizes(&[PAGE_SIZE, PAGE_SIZE, 1234]);
        let records = fetch_all(&transport, "/structures/", base_query(), |_| ()).unwrap();
        assert_eq!(records.len(), 101_234);
        assert_eq!(transport.page_indexes(), vec!["1", "2", "3"]);
        let first = &transport.seen.borrow()[0];
        assert!(first.contains(&("pageSize".to_string(), "50000".to_string())));
        assert!(first.contains(&("format".to_string(), "json".to_string())));
    }

    #[test]
    fn empty_first_page_is_one_request() {
        let transport = FakeTransport::with_page_sizes(&[0]);
        let records = fetch_all(&transport, "/structures/", base_query(), |_| ()).unwrap();
        assert!(records.is_empty());
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn exact_multiple_costs_one_empty_request() {
        let transport = FakeTransport::with_page_sizes(&[PAGE_SIZE, 0]);
        let records = fetch_all(&transport, "/structures/", base_query(), |_| ()).unwrap();
        assert_eq!(records.len(), PAGE_SIZE);
        assert_eq!(transport.page_indexes(), vec!["1", "2"]);
    }

    #[test]
    fn api_error_discards_accumulated_records() {
        let transport = FakeTransport::new(vec![
            ok(json!({ "ResultList": vec![json!({}); PAGE_SIZE] })),
            TransportResponse {
                status: 503,
                message: "Service Unavailable".to_string(),
                body: "ResultList is not here".to_string(),
            },
        ]);
        let err = fetch_all(&transport, "/structures/", base_query(), |_| ()).unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_envelope_is_an_empty_page() {
        let transport = FakeTransport::new(vec![ok(json!({"Message": "no data"}))]);
        let records = fetch_all(&transport, "/structures/", base_query(), |_| ()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn iterator_stops_after_an_error() {
        let transport = FakeTransport::new(vec![TransportResponse {
            status: 500,
            message: "Internal Server Error".to_string(),
            body: String::new(),
        }]);
        let mut pages = Pages::new(&transport, "/structures/", base_query(), |_| ());
        assert!(matches!(pages.next(), Some(Err(Error::Api { status: 500, .. }))));
        assert_eq!(pages.state(), PageState::Done);
        assert!(pages.next().is_none());
    }
}
