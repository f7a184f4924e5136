use cdss_api::types::Timescale;
use cdss_api::{
    AdminCallQuery, Client, Config, Error, StructureQuery, SurfaceWaterTsQuery, TelemetryTsQuery,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

// The blocking client must not run on the async test runtime's own thread.
async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test]
async fn get_structures_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("structures.json");

    Mock::given(method("GET"))
        .and(path("/structures/"))
        .and(query_param("format", "json"))
        .and(query_param("wdid", "0100578"))
        .and(query_param("pageSize", "50000"))
        .and(query_param("pageIndex", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        client.get_structures(&StructureQuery::default().with_wdid("0100578"))
    })
    .await;
    assert!(result.is_ok());

    let structures = result.unwrap();
    assert_eq!(structures.len(), 2);
    assert_eq!(structures[0].wdid.as_deref(), Some("0100578"));
    assert_eq!(structures[0].division, Some(1));
    assert_eq!(structures[0].utm_x, Some(543592.3));
    assert!(structures[0].modified.is_some());
    assert!(structures[0].metadata.is_empty());
}

#[tokio::test]
async fn get_structures_sends_encoded_wdid_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/structures/"))
        .and(query_param("wdid", "0100578, 0100504"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ResultList": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        let query = StructureQuery::default()
            .with_wdid("0100578")
            .with_wdid("0100504");
        client.get_structures(&query)
    })
    .await;
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn get_structures_keeps_reserved_characters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/structures/"))
        .and(query_param("county", "A+B 100% C=D"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ResultList": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        client.get_structures(&StructureQuery::default().with_county("A+B 100% C=D"))
    })
    .await;
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn get_structures_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/structures/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        client.get_structures(&StructureQuery::default())
    })
    .await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_structures_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/structures/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        client.get_structures(&StructureQuery::default())
    })
    .await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn api_key_sent_as_token_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/administrativecalls/active/"))
        .and(header("Token", "secret-key"))
        .and(query_param("apiKey", "secret-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("admin_calls_active.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let config = Config::default()
            .with_base_url(&uri)
            .with_api_key("secret-key");
        let client = Client::with_config(config)?;
        client.get_admin_calls(&AdminCallQuery::default())
    })
    .await;
    let calls = result.unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].call_number, Some(32412));
}

#[tokio::test]
async fn telemetry_uses_configured_default_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/telemetrystations/telemetrytimeserieshour/"))
        .and(query_param("abbrev", "PLAKERCO"))
        .and(query_param("parameter", "GAGE_HT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ResultList": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let config = Config::default()
            .with_base_url(&uri)
            .with_default_parameter("GAGE_HT");
        let client = Client::with_config(config)?;
        client.get_telemetry_ts(&TelemetryTsQuery::new("PLAKERCO").with_timescale(Timescale::Hour))
    })
    .await;
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_timescale_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ResultList": []}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || -> Result<_, Error> {
        let client = Client::with_base_url(&uri)?;
        client.get_sw_ts(&SurfaceWaterTsQuery::default().with_timescale(Timescale::Hour))
    })
    .await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
