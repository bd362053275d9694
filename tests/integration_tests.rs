//! Integration tests using mock HTTP servers and stubbed transports
//!
//! Tests the full flow: endpoint → URL → GET → decode → typed result

use chrono::{TimeZone, Utc};
use futures::future::join_all;
use ghprofile::date;
use ghprofile::http::{NetworkRequest, ReposRequest, SnakeCaseReposRequest, UserRequest};
use ghprofile::{ClientConfig, Endpoint, ErrorKind, GithubClient, StubTransport, User};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VINHNX_JSON: &str = include_str!("fixtures/vinhnx.json");
const VINHNX_REPOS_JSON: &str = include_str!("fixtures/vinhnx_repos.json");

async fn mock_github() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/vinhnx"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(VINHNX_JSON, "application/json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/vinhnx/repos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(VINHNX_REPOS_JSON, "application/json"),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

fn client_for(mock_server: &MockServer) -> GithubClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/users", mock_server.uri()))
        .timeout(Duration::from_secs(10))
        .build();
    GithubClient::with_config(config).unwrap()
}

// ============================================================================
// Fixture Tests
// ============================================================================

#[tokio::test]
async fn test_return_user_info() {
    let mock_server = mock_github().await;
    let client = client_for(&mock_server);

    let user = UserRequest
        .fetch_request(&client, &Endpoint::profile("vinhnx"))
        .await
        .unwrap();

    assert_eq!(user.user_name.as_deref(), Some("vinhnx"));
}

#[tokio::test]
async fn test_user_created_date_matches_fixture() {
    let mock_server = mock_github().await;
    let client = client_for(&mock_server);

    let user: User = client.fetch(&Endpoint::profile("vinhnx")).await.unwrap();

    let fixture: serde_json::Value = serde_json::from_str(VINHNX_JSON).unwrap();
    let expected = date::parse(fixture["created_at"].as_str().unwrap()).unwrap();
    assert_eq!(user.created_date, Some(expected));
    assert_eq!(
        user.created_date,
        Some(Utc.with_ymd_and_hms(2011, 10, 3, 1, 5, 57).unwrap())
    );
}

#[tokio::test]
async fn test_return_repositories() {
    let mock_server = mock_github().await;
    let client = client_for(&mock_server);

    let repos = ReposRequest
        .fetch_request(&client, &Endpoint::repos("vinhnx"))
        .await
        .unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[1].full_name.as_deref(), Some("vinhnx/Clendar"));
    let owner = repos[0].owner.as_ref().unwrap();
    assert_eq!(owner.user_name.as_deref(), Some("vinhnx"));

    let snake_repos = SnakeCaseReposRequest
        .fetch_request(&client, &Endpoint::repos("vinhnx"))
        .await
        .unwrap();
    assert_eq!(
        snake_repos[0].full_name.as_deref(),
        Some("vinhnx/UnitTestingNetworkWithStub")
    );
}

#[tokio::test]
async fn test_repositories_with_malformed_element_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/vinhnx/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"full_name": "vinhnx/good"},
            {"full_name": "vinhnx/bad", "owner": {"login": "vinhnx", "created_at": "Oct 3 2011"}}
        ])))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).repos("vinhnx").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_not_found_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).user("nobody").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

// ============================================================================
// Stubbed Transport Tests
// ============================================================================

#[tokio::test]
async fn test_stubbed_fixture() {
    let transport = StubTransport::new().json("https://api.github.com/users/vinhnx", VINHNX_JSON);
    let client = GithubClient::with_transport(&ClientConfig::default(), transport);

    let user = client.user("vinhnx").await.unwrap();
    assert_eq!(user.user_name.as_deref(), Some("vinhnx"));
    assert_eq!(user.created_date, Some(date::parse("2011-10-03T01:05:57Z").unwrap()));
}

#[tokio::test]
async fn test_custom_error() {
    let transport = StubTransport::new().failure(
        "https://api.github.com/users/vinhnx",
        "com.vinhnx.error.domain",
        404,
    );
    let client = GithubClient::with_transport(&ClientConfig::default(), transport);

    let result = UserRequest
        .fetch_request(&client, &Endpoint::profile("vinhnx"))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.message().is_empty());
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_independent_fetches_run_concurrently() {
    let mock_server = mock_github().await;
    let client = client_for(&mock_server);

    let endpoints = [
        Endpoint::profile("vinhnx"),
        Endpoint::profile("missing"),
        Endpoint::profile(""),
        Endpoint::profile("vinhnx"),
    ];
    let results = join_all(endpoints.iter().map(|e| client.fetch::<User>(e))).await;

    assert!(results[0].is_ok());
    // wiremock answers unmatched paths with an empty 404
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::Transport);
    assert_eq!(results[2].as_ref().unwrap_err().kind(), ErrorKind::InvalidUrl);
    assert_eq!(results[3].as_ref().unwrap(), results[0].as_ref().unwrap());
}

#[tokio::test]
async fn test_dropped_fetch_is_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(VINHNX_JSON, "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome =
        tokio::time::timeout(Duration::from_millis(100), client.user("slow")).await;

    assert!(outcome.is_err());
}
