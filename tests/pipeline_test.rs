use mockito::Server;
use serde_json::json;

use newsgen::{handler, ArticleGenerator, HttpDocumentStore};

const MODEL_CONTENT: &str = r#"{"title":"Fuel Prices Surge Again","summary":"Prices rose sharply.","body":"Fuel prices surged again this week. Fuel price increases hit commuters. Analysts expect price pressure to continue across the region."}"#;

fn model_response(content: &str) -> String {
    json!({
        "choices": [{"message": {"content": content}}]
    })
    .to_string()
}

async fn setup(server: &Server) -> (ArticleGenerator, HttpDocumentStore) {
    let generator = ArticleGenerator::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gpt-4o-mini".to_string(),
    );
    let store =
        HttpDocumentStore::with_endpoint(server.url(), "db1".to_string(), "news".to_string());
    (generator, store)
}

#[tokio::test]
async fn test_full_pipeline_success() {
    let mut server = Server::new_async().await;
    let model_mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response(MODEL_CONTENT))
        .create();
    let store_mock = server
        .mock("POST", "/databases/db1/collections/news/documents")
        .match_body(mockito::Matcher::AllOf(vec![
            // Record carries article, SEO and static defaults
            mockito::Matcher::Regex(r#""title":"Fuel Prices Surge Again""#.to_string()),
            mockito::Matcher::Regex(r#""slug":"fuel-prices-surge-again""#.to_string()),
            mockito::Matcher::Regex(r#""views":0"#.to_string()),
            mockito::Matcher::Regex(r#""flagged":false"#.to_string()),
            mockito::Matcher::Regex(r#""status":"published""#.to_string()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"$id": "doc42"}"#)
        .create();

    let (generator, store) = setup(&server).await;
    let body = json!({"topic": "fuel price", "language": "EN", "trendType": "spike"});
    let response = handler::handle("POST", &body, &generator, &store).await;

    assert_eq!(response.status, 201);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["id"], "doc42");
    assert_eq!(response.body["newsId"], "doc42");
    assert_eq!(response.body["title"], "Fuel Prices Surge Again");
    assert_eq!(response.body["language"], "en");
    assert_eq!(response.body["trendType"], "spike");
    model_mock.assert();
    store_mock.assert();
}

#[tokio::test]
async fn test_malformed_model_output_still_persists_article() {
    let mut server = Server::new_async().await;
    let _model = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response("Here is the article you asked for, no JSON."))
        .create();
    let store_mock = server
        .mock("POST", "/databases/db1/collections/news/documents")
        .match_body(mockito::Matcher::Regex(
            // Title falls back to the topic
            r#""title":"fuel price""#.to_string(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"$id": "doc7"}"#)
        .create();

    let (generator, store) = setup(&server).await;
    let body = json!({"topic": "fuel price"});
    let response = handler::handle("POST", &body, &generator, &store).await;

    assert_eq!(response.status, 201);
    store_mock.assert();
}

#[tokio::test]
async fn test_wrong_method_is_rejected_before_pipeline() {
    let server = Server::new_async().await;
    // No mocks registered: nothing may be called
    let (generator, store) = setup(&server).await;

    let response =
        handler::handle("GET", &json!({"topic": "fuel price"}), &generator, &store).await;
    assert_eq!(response.status, 405);
    assert_eq!(response.body["error"], "method not allowed");
}

#[tokio::test]
async fn test_missing_topic_is_rejected_with_400() {
    let server = Server::new_async().await;
    let (generator, store) = setup(&server).await;

    let response = handler::handle("POST", &json!({"language": "en"}), &generator, &store).await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"], "missing or empty topic");
}

#[tokio::test]
async fn test_model_failure_is_generic_500() {
    let mut server = Server::new_async().await;
    let _model = server
        .mock("POST", "/v1/chat/completions")
        .with_status(502)
        .with_body("bad gateway")
        .create();

    let (generator, store) = setup(&server).await;
    let response = handler::handle("POST", &json!({"topic": "fuel price"}), &generator, &store).await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "generation failed");
    // Upstream detail is logged, never echoed
    assert!(response.body.get("detail").is_none());
}

#[tokio::test]
async fn test_all_empty_json_article_is_not_persisted() {
    let mut server = Server::new_async().await;
    let _model = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response(r#"{"title":"","summary":"","body":""}"#))
        .create();
    let store_mock = server
        .mock("POST", "/databases/db1/collections/news/documents")
        .expect(0)
        .create();

    let (generator, store) = setup(&server).await;
    let response = handler::handle("POST", &json!({"topic": "fuel price"}), &generator, &store).await;

    assert_eq!(response.status, 500);
    store_mock.assert();
}

#[tokio::test]
async fn test_store_failure_surfaces_detail() {
    let mut server = Server::new_async().await;
    let _model = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_response(MODEL_CONTENT))
        .create();
    let _store = server
        .mock("POST", "/databases/db1/collections/news/documents")
        .with_status(401)
        .with_body("unauthorized")
        .create();

    let (generator, store) = setup(&server).await;
    let response = handler::handle("POST", &json!({"topic": "fuel price"}), &generator, &store).await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "generation failed");
    assert!(response.body["detail"]
        .as_str()
        .unwrap()
        .contains("unauthorized"));
}
