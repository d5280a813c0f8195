//! v1 binding tests.
//!
//! v1 carries the API key in the path and authenticates users with Basic
//! auth over a password digest.

use chrono::NaiveDate;
use trakt::{basic_auth_header, v1, Trakt, TraktError, HEADER_TRAKT_API_KEY};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(mock_server: &MockServer) -> Trakt {
    let mut trakt = Trakt::v1();
    trakt.set_api_key("abc").set_base_url(mock_server.uri());
    trakt
}

#[tokio::test]
async fn test_calendar_shows_puts_api_key_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendar/shows.json/abc/20140901/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "date": "2014-09-01",
            "episodes": [{
                "show": { "title": "True Blood", "year": 2008, "tvdb_id": 82283 },
                "episode": { "season": 7, "number": 10, "title": "Thank You" }
            }]
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let days = trakt
        .resource::<v1::Calendar>()
        .unwrap()
        .shows(NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(), 7)
        .await
        .unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].episodes[0].show.tvdb_id, Some(82283));
    assert_eq!(days[0].episodes[0].episode.number, Some(10));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(HEADER_TRAKT_API_KEY).is_none());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_account_test_sends_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/account/test/abc"))
        .and(header(
            "authorization",
            basic_auth_header("sean", "f3bbbd66a63d4bf1747940578ec3d0103530e21d").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "all good!"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    trakt.set_credentials("sean", "f3bbbd66a63d4bf1747940578ec3d0103530e21d");

    let response = trakt.resource::<v1::Account>().unwrap().test().await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_credentials_change_reaches_the_next_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/account/test/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    trakt.set_credentials("alice", "d1");
    trakt.resource::<v1::Account>().unwrap().test().await.unwrap();
    trakt.set_credentials("bob", "d2");
    trakt.resource::<v1::Account>().unwrap().test().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let auth: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("authorization").unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(auth, vec![basic_auth_header("alice", "d1"), basic_auth_header("bob", "d2")]);
}

#[tokio::test]
async fn test_v1_unauthorized_requires_authentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/account/test/abc"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "failure",
            "error": "failed authentication"
        })))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let err = trakt.resource::<v1::Account>().unwrap().test().await.unwrap_err();
    assert!(matches!(err, TraktError::AuthenticationRequired { status: 401 }));
}

#[test]
fn test_v1_default_endpoints() {
    let mut trakt = Trakt::v1();
    assert_eq!(trakt.base_url(), "http://api.trakt.tv");
    trakt.set_use_ssl(true);
    assert_eq!(trakt.base_url(), "https://api.trakt.tv");
}
