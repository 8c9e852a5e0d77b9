//! Justification provider tests against a local mock generation endpoint

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use sommelier_api::models::{Acidity, Dish, Intensity, Wine, WineStyle};
use sommelier_api::services::justification::{
    build_justifier, GeminiClient, GeminiError, GeminiJustifier, JustificationProvider,
    TemplateJustifier,
};
use sommelier_common::config::JustificationConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct MockEndpoint {
    status: StatusCode,
    body: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn mock_handler(State(mock): State<MockEndpoint>, uri: Uri, body: String) -> (StatusCode, Json<Value>) {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.seen.lock().unwrap().push((uri.to_string(), parsed));
    tokio::time::sleep(mock.delay).await;
    (mock.status, Json(mock.body.clone()))
}

/// Start a mock server; returns its base URL and the recorded requests
async fn spawn_mock(
    status: StatusCode,
    body: Value,
    delay: Duration,
) -> (String, Arc<Mutex<Vec<(String, Value)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mock = MockEndpoint {
        status,
        body,
        delay,
        seen: Arc::clone(&seen),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(mock_handler).with_state(mock);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta", addr), seen)
}

fn config_for(base_url: &str) -> JustificationConfig {
    JustificationConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 1,
        ..JustificationConfig::default()
    }
}

fn text_response(text: &str) -> Value {
    json!({ "candidates": [ { "content": { "parts": [ { "text": text } ] } } ] })
}

fn sample() -> (Dish, Wine) {
    let dish = Dish {
        id: "2".to_string(),
        name: "Sushi".to_string(),
        description: "Sushi with arroz, peixe cru".to_string(),
        category: "fish".to_string(),
        ingredients: vec!["arroz".to_string(), "peixe cru".to_string()],
        intensity: Intensity::Mild,
        acidity: Some(Acidity::High),
        seasonings: None,
    };
    let wine = Wine {
        id: 1,
        name: "Pinot Grigio".to_string(),
        grape_variety: "Pinot Grigio".to_string(),
        style: WineStyle::White,
        full_style: "branco seco".to_string(),
        region: "Brazil".to_string(),
        description: "white wine, seco".to_string(),
        pairing_tags: vec!["fish".to_string(), "seafood".to_string()],
    };
    (dish, wine)
}

#[tokio::test]
async fn generated_text_is_returned_trimmed() {
    let (base_url, seen) = spawn_mock(
        StatusCode::OK,
        text_response("\n  Crisp acidity lifts the rice and fish.  "),
        Duration::ZERO,
    )
    .await;
    let (dish, wine) = sample();
    let justifier = GeminiJustifier::new(GeminiClient::new(&config_for(&base_url), "test-key".to_string()).unwrap());

    let text = justifier.justify(&dish, &wine).await;
    assert_eq!(text, "Crisp acidity lifts the rice and fish.");

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (uri, body) = &requests[0];
    assert!(uri.contains("/v1beta/models/gemini-pro:generateContent"));
    assert!(uri.contains("key=test-key"));

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Pinot Grigio"));
    assert!(prompt.contains("Sushi"));
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 200);
    assert_eq!(body["generationConfig"]["topK"], 40);
}

#[tokio::test]
async fn server_error_falls_back_to_template() {
    let (base_url, _) = spawn_mock(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "boom" }),
        Duration::ZERO,
    )
    .await;
    let (dish, wine) = sample();
    let client = GeminiClient::new(&config_for(&base_url), "test-key".to_string()).unwrap();

    match client.generate("prompt").await {
        Err(GeminiError::ApiError(status, _)) => assert_eq!(status, 500),
        other => panic!("expected API error, got {:?}", other),
    }

    let justifier = GeminiJustifier::new(client);
    assert_eq!(
        justifier.justify(&dish, &wine).await,
        TemplateJustifier::render(&dish, &wine)
    );
}

#[tokio::test]
async fn empty_candidates_fall_back_to_template() {
    let (base_url, _) = spawn_mock(StatusCode::OK, json!({ "candidates": [] }), Duration::ZERO).await;
    let (dish, wine) = sample();
    let client = GeminiClient::new(&config_for(&base_url), "test-key".to_string()).unwrap();

    assert!(matches!(
        client.generate("prompt").await,
        Err(GeminiError::EmptyResponse)
    ));

    let text = GeminiJustifier::new(client).justify(&dish, &wine).await;
    assert!(text.contains("Sushi"));
    assert!(text.contains("Pinot Grigio"));
}

#[tokio::test]
async fn slow_response_times_out_to_template() {
    let (base_url, _) = spawn_mock(
        StatusCode::OK,
        text_response("too late"),
        Duration::from_secs(3),
    )
    .await;
    let (dish, wine) = sample();
    let client = GeminiClient::new(&config_for(&base_url), "test-key".to_string()).unwrap();

    assert!(matches!(client.generate("prompt").await, Err(GeminiError::Timeout)));

    let text = GeminiJustifier::new(client).justify(&dish, &wine).await;
    assert_eq!(text, TemplateJustifier::render(&dish, &wine));
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_template() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (dish, wine) = sample();
    let config = config_for(&format!("http://{}/v1beta", addr));
    let justifier = build_justifier(&config);

    assert_eq!(
        justifier.justify(&dish, &wine).await,
        TemplateJustifier::render(&dish, &wine)
    );
}

#[tokio::test]
async fn missing_key_selects_template_without_network() {
    let (base_url, seen) = spawn_mock(StatusCode::OK, text_response("unused"), Duration::ZERO).await;
    let (dish, wine) = sample();
    let config = JustificationConfig {
        api_key: Some("   ".to_string()),
        ..config_for(&base_url)
    };

    let text = build_justifier(&config).justify(&dish, &wine).await;
    assert_eq!(text, TemplateJustifier::render(&dish, &wine));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn configured_key_selects_network_provider() {
    let (base_url, seen) = spawn_mock(StatusCode::OK, text_response("From the model."), Duration::ZERO).await;
    let (dish, wine) = sample();

    let text = build_justifier(&config_for(&base_url)).justify(&dish, &wine).await;
    assert_eq!(text, "From the model.");
    assert_eq!(seen.lock().unwrap().len(), 1);
}
