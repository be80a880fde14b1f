//! Integration tests for the worksheet HTTP client

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use worksheet_core::{
    Credentials, EstimatedDuration, MemoryTokenStore, Session, WorksheetRequest,
};
use worksheet_http::{ClientError, WorksheetClient};

fn client_with_token(server: &MockServer, token: Option<&str>) -> WorksheetClient {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    WorksheetClient::new(server.uri(), Session::new(Arc::new(store))).unwrap()
}

fn sample_request() -> WorksheetRequest {
    WorksheetRequest {
        level: "A2".to_string(),
        topic: "Schule".to_string(),
        age_group: "11-13".to_string(),
        duration: 30,
        activity_types: vec!["fill_in_the_blanks".to_string(), "vocabulary".to_string()],
        theme_words: Some(vec!["cats".to_string(), "dogs".to_string()]),
    }
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_stored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer t1"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com", "credits": 5})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let profile = client.fetch_me().await.unwrap();
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.credits, 5);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t1"})))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    client
        .login(&Credentials::new("ada@example.com", "secret1"))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_token_changes_apply_to_next_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com", "credits": 1})),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    client.session().save("fresh");
    client.fetch_me().await.unwrap();
    client.session().clear();
    client.fetch_me().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer fresh"
    );
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "t1",
            "refresh_token": "r1",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    let response = client
        .login(&Credentials::new("ada@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(response.access_token, "t1");
    assert_eq!(response.refresh_token.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_register_accepts_public_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "email": "ada@example.com",
            "credits": 10,
            "plan": "free",
            "created_at": "2024-05-01T10:00:00"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    let user = client
        .register(&Credentials::new("ada@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.credits, Some(10));
}

#[tokio::test]
async fn test_generate_worksheet_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/worksheet/generate"))
        .and(header("authorization", "Bearer t1"))
        .and(body_json(json!({
            "level": "A2",
            "topic": "Schule",
            "age_group": "11-13",
            "duration": 30,
            "activity_types": ["fill_in_the_blanks", "vocabulary"],
            "theme_words": ["cats", "dogs"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Schule (A2)",
            "estimated_duration": "30 Minuten",
            "content": ["1) Lücken ausfüllen"],
            "solutions": ["1) Der Mann ist Lehrer."],
            "remaining_credits": 7
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let result = client.generate_worksheet(&sample_request()).await.unwrap();
    assert_eq!(result.title, "Schule (A2)");
    assert_eq!(
        result.estimated_duration,
        EstimatedDuration::Text("30 Minuten".to_string())
    );
    assert_eq!(result.remaining_credits, 7);
}

#[tokio::test]
async fn test_error_detail_becomes_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    let err = client
        .login(&Credentials::new("ada@example.com", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_forbidden_is_distinct_from_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/worksheet/generate"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"detail": "Not enough credits"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let err = client.generate_worksheet(&sample_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(!err.is_auth_expired());
    assert_eq!(err.to_string(), "Not enough credits");
}

#[tokio::test]
async fn test_error_without_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let err = client.fetch_me().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "Something went wrong");
}

#[tokio::test]
async fn test_error_with_json_missing_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let err = client.fetch_me().await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    assert_eq!(err.to_string(), "Something went wrong");
}

#[tokio::test]
async fn test_shape_mismatch_is_a_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com"})))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, Some("t1"));
    let err = client.fetch_me().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_network_failure_has_no_status() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client =
        WorksheetClient::new(format!("http://127.0.0.1:{port}"), Session::in_memory()).unwrap();
    let err = client.fetch_me().await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_caller_headers_override_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("content-type", "application/vnd.worksheet+json"))
        .and(header("x-request-source", "tests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com", "credits": 2})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/vnd.worksheet+json"),
    );
    headers.insert(
        "x-request-source",
        reqwest::header::HeaderValue::from_static("tests"),
    );
    let request = client.request_with_headers(reqwest::Method::GET, "/me", headers);
    let profile: worksheet_core::UserProfile = client.execute(request).await.unwrap();
    assert_eq!(profile.credits, 2);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get_all("content-type").iter().count(), 1);
}

#[tokio::test]
async fn test_builder_sets_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("user-agent", "worksheet-tests/1.0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com", "credits": 3})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WorksheetClient::builder()
        .base_url(mock_server.uri())
        .session(Session::in_memory())
        .user_agent("worksheet-tests/1.0")
        .build()
        .unwrap();
    client.fetch_me().await.unwrap();
}

#[tokio::test]
async fn test_default_user_agent_names_the_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com", "credits": 3})),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, None);
    client.fetch_me().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(agent.starts_with("worksheet-client/"), "{agent}");
}

#[tokio::test]
async fn test_builder_timeout_fails_slow_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"email": "ada@example.com", "credits": 3}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = WorksheetClient::builder()
        .base_url(mock_server.uri())
        .session(Session::in_memory())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = client.fetch_me().await.unwrap_err();
    match err {
        ClientError::Request(inner) => assert!(inner.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
