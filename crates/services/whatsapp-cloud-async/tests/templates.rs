use serde_json::json;
use whatsapp_cloud_async::types::template::{CreateTemplateRequest, TemplateCategory, TemplateStatus};
use whatsapp_cloud_async::{Client, WhatsAppConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<WhatsAppConfig> {
    let config = WhatsAppConfig::new()
        .with_api_base(server.uri())
        .with_api_version("v19.0")
        .with_access_token("test-token");
    Client::with_config(config)
}

#[tokio::test]
async fn create_template() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/102290129340398/message_templates"))
        .and(body_json(json!({
            "name": "seasonal_promotion",
            "category": "MARKETING",
            "language": "en_US",
            "components": [{ "type": "BODY", "text": "Shop now through the end of August" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "572279198452421",
            "status": "PENDING",
            "category": "MARKETING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateTemplateRequest::new("seasonal_promotion", TemplateCategory::Marketing, "en_US")
        .with_components(vec![json!({ "type": "BODY", "text": "Shop now through the end of August" })]);

    let client = test_client(&server);
    let resp = client
        .templates()
        .create("102290129340398", &request)
        .await
        .unwrap();

    let created = resp.data().unwrap();
    assert_eq!(created.id.as_deref(), Some("572279198452421"));
    assert_eq!(created.status, Some(TemplateStatus::Pending));
}

#[tokio::test]
async fn list_templates_with_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v19.0/102290129340398/message_templates"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "name": "hello_world", "language": "en_US", "status": "APPROVED", "category": "UTILITY", "id": "1" },
                { "name": "seasonal_promotion", "language": "en_US", "status": "REJECTED", "category": "MARKETING", "id": "2" }
            ],
            "paging": { "cursors": { "before": "MAZDZD", "after": "MjQZD" }, "next": "https://next-page" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .templates()
        .list("102290129340398", Some(2))
        .await
        .unwrap();

    let page = resp.data().unwrap();
    assert_eq!(page.templates.len(), 2);
    assert_eq!(page.templates[1].status, Some(TemplateStatus::Rejected));
    assert_eq!(
        page.paging.as_ref().unwrap().next.as_deref(),
        Some("https://next-page")
    );
}

#[tokio::test]
async fn delete_template_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v19.0/102290129340398/message_templates"))
        .and(query_param("name", "seasonal_promotion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .templates()
        .delete("102290129340398", "seasonal_promotion")
        .await
        .unwrap();

    assert!(resp.data().unwrap().is_success());
}
