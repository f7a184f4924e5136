//! The HTTP seam. The paginator only sees [`Transport`], so tests can swap
//! in canned pages.

use serde_json::Value;
use url::Url;

use crate::{config::Config, Error};

/// A completed HTTP exchange, success or not.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// Reason phrase for `status`, e.g. `Not Found`.
    pub message: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn json(&self) -> Result<Value, Error> {
        serde_json::from_str(&self.body).map_err(|e| {
            tracing::error!("Failed to parse response body: {} | body: {}", e, truncate_body(&self.body));
            Error::InvalidResponse(e.to_string())
        })
    }
}

/// Performs one GET. `query` holds wire-format pairs, already encoded by
/// the query builder, and must be sent as is.
pub trait Transport {
    fn get(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse, Error>;
}

/// Blocking reqwest transport. Adds the API key as both the `Token` header
/// and the `apiKey` query parameter.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        let encoded = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&encoded));
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse, Error> {
        let mut url = self.url(path, query)?;
        if self.config.debug {
            tracing::info!(url = %url, "CDSS API request");
        } else {
            tracing::debug!(url = %url, "CDSS API request");
        }

        if let Some(api_key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("apiKey", api_key);
        }
        let mut request = self.client.get(url).header("accept", "application/json");
        if let Some(api_key) = &self.config.api_key {
            request = request.header("Token", api_key.as_str());
        }

        let resp = request.send().map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        if !status.is_success() {
            tracing::error!("Request failed with status {}: {}", status, truncate_body(&body));
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryBuilder;

    fn decoded(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn built_values_survive_the_round_trip() {
        let transport = HttpTransport::new(Config::default()).unwrap();
        let query = QueryBuilder::new()
            .param("stationName", Some("A+B 100% C=D"))
            .param("waterSource", Some("SOUTH PLATTE & CO #2"))
            .build();
        let url = transport.url("/surfacewater/surfacewaterstations/", &query).unwrap();
        assert_eq!(decoded(&url, "stationName").as_deref(), Some("A+B 100% C=D"));
        assert_eq!(
            decoded(&url, "waterSource").as_deref(),
            Some("SOUTH PLATTE & CO #2")
        );
        assert_eq!(decoded(&url, "format").as_deref(), Some("json"));
    }

    #[test]
    fn url_joins_base_and_path() {
        let transport =
            HttpTransport::new(Config::default().with_base_url("http://localhost:9000/api/v2"))
                .unwrap();
        let url = transport
            .url(
                "/structures/",
                &[
                    ("format".to_string(), "json".to_string()),
                    ("wdid".to_string(), "0100578%2C+0100504".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/v2/structures/?format=json&wdid=0100578%2C+0100504"
        );
        assert_eq!(decoded(&url, "wdid").as_deref(), Some("0100578, 0100504"));
    }

    #[test]
    fn success_range_and_json() {
        let ok = TransportResponse {
            status: 200,
            message: "OK".to_string(),
            body: r#"{"ResultList": []}"#.to_string(),
        };
        assert!(ok.is_success());
        assert!(ok.json().unwrap().get("ResultList").is_some());

        let bad = TransportResponse {
            status: 200,
            message: "OK".to_string(),
            body: "<html>".to_string(),
        };
        assert!(matches!(bad.json(), Err(Error::InvalidResponse(_))));

        let missing = TransportResponse {
            status: 404,
            message: "Not Found".to_string(),
            body: String::new(),
        };
        assert!(!missing.is_success());
    }
}
