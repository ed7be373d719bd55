use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use serial_test::serial;
use whatsapp_cloud_async::response::SuccessResponse;
use whatsapp_cloud_async::test_support::EnvGuard;
use whatsapp_cloud_async::{Client, RequestBody, Response, WhatsAppConfig, WhatsAppError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<WhatsAppConfig> {
    let config = WhatsAppConfig::new()
        .with_api_base(server.uri())
        .with_api_version("v19.0")
        .with_access_token("test-token");
    Client::with_config(config)
}

#[tokio::test]
async fn non_json_error_body_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .send_request(Method::GET, "me", RequestBody::None, None)
        .await
        .unwrap_err();

    match err {
        WhatsAppError::Http {
            status,
            body,
            error_info,
        } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
            assert!(error_info.is_none());
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn json_error_body_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Invalid OAuth access token.", "type": "OAuthException", "code": 190 }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let raw = client
        .send_request(Method::GET, "me", RequestBody::None, None)
        .await
        .unwrap();

    let resp = Response::<SuccessResponse>::from_transport(raw);
    assert!(resp.is_error());
    assert_eq!(resp.error().unwrap().code, Some(190));
}

#[tokio::test]
async fn empty_success_body_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/123/deregister"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let raw = client
        .send_request(Method::POST, "123/deregister", RequestBody::None, None)
        .await
        .unwrap();
    assert_eq!(raw, None);
}

#[tokio::test]
async fn query_and_extra_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/me"))
        .and(query_param("fields", "id,name"))
        .and(header("x-request-tag", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut extra = HeaderMap::new();
    extra.insert("x-request-tag", HeaderValue::from_static("abc"));

    let client = test_client(&server);
    let raw = client
        .send_request(
            Method::GET,
            "me",
            RequestBody::Query(vec![("fields".into(), "id,name".into())]),
            Some(extra),
        )
        .await
        .unwrap();
    assert_eq!(raw, Some(json!({ "id": "1" })));
}

#[tokio::test]
#[serial(env)]
async fn missing_token_fails_before_any_request() {
    let _env = EnvGuard::default().remove("WHATSAPP_ACCESS_TOKEN");
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::with_config(WhatsAppConfig::new().with_api_base(server.uri()));
    let err = client
        .messages()
        .send_text("123123", "56789", "hola", None, None)
        .await
        .unwrap_err();

    match err {
        WhatsAppError::Config(msg) => assert!(msg.contains("WHATSAPP_ACCESS_TOKEN")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[tokio::test]
#[serial(env)]
async fn env_token_is_used_as_bearer() {
    let server = MockServer::start().await;
    let _env = EnvGuard::default()
        .set("WHATSAPP_ACCESS_TOKEN", "env-token")
        .set("WHATSAPP_API_BASE", &server.uri())
        .set("WHATSAPP_API_VERSION", "v20.0");

    Mock::given(method("GET"))
        .and(path("/v20.0/me"))
        .and(header("authorization", "Bearer env-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new();
    let raw = client
        .send_request(Method::GET, "me", RequestBody::None, None)
        .await
        .unwrap();
    assert!(raw.is_some());
}
