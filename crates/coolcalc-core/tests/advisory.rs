use coolcalc_core::advisory::{
    build_prompt, AdvisoryClient, AdvisoryError, AdvisoryRequest, AdvisorySource,
};
use coolcalc_core::config::AdvisoryConfig;
use coolcalc_core::{Language, RoomType};
use httpmock::prelude::*;
use serde_json::json;

const MODEL_PATH: &str = "/v1beta/models/test-model:generateContent";

fn config_for(server: &MockServer) -> AdvisoryConfig {
    AdvisoryConfig {
        endpoint: server.base_url(),
        model: "test-model".to_string(),
        timeout_secs: 5,
        ..AdvisoryConfig::default()
    }
}

fn request(language: Language) -> AdvisoryRequest {
    AdvisoryRequest {
        area: 24.0,
        room_type: RoomType::Office,
        description: "west facing, two monitors".to_string(),
        language,
    }
}

#[tokio::test]
async fn returns_service_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(MODEL_PATH)
                .header("x-goog-api-key", "test-key")
                .body_includes("generationConfig")
                .body_includes("west facing, two monitors");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "  Size up by one band.  " }] }
                }]
            }));
        })
        .await;

    let client = AdvisoryClient::new(&config_for(&server), Some("test-key".to_string())).unwrap();
    let advisory = client.advise(&request(Language::En)).await;

    mock.assert_async().await;
    assert_eq!(advisory.source, AdvisorySource::Service);
    assert_eq!(advisory.text, "Size up by one band.");
}

#[tokio::test]
async fn missing_key_falls_back_without_calling_out() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200);
        })
        .await;

    let client = AdvisoryClient::new(&config_for(&server), None).unwrap();

    let err = client.request(&request(Language::En)).await.unwrap_err();
    assert!(matches!(err, AdvisoryError::MissingKey));

    let advisory = client.advise(&request(Language::Fr)).await;
    assert_eq!(advisory.source, AdvisorySource::Fallback);
    assert_eq!(advisory.text, Language::Fr.advisory_fallback());
    mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(500).body("quota exceeded");
        })
        .await;

    let client = AdvisoryClient::new(&config_for(&server), Some("test-key".to_string())).unwrap();

    let err = client.request(&request(Language::En)).await.unwrap_err();
    assert!(matches!(err, AdvisoryError::Http { status: 500, .. }));

    let advisory = client.advise(&request(Language::Zh)).await;
    assert_eq!(advisory.source, AdvisorySource::Fallback);
    assert_eq!(advisory.text, Language::Zh.advisory_fallback());
}

#[tokio::test]
async fn empty_candidates_are_an_empty_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(json!({ "candidates": [] }));
        })
        .await;

    let client = AdvisoryClient::new(&config_for(&server), Some("test-key".to_string())).unwrap();

    let err = client.request(&request(Language::En)).await.unwrap_err();
    assert!(matches!(err, AdvisoryError::EmptyResponse));
}

#[test]
fn prompt_is_localized() {
    let en = build_prompt(&request(Language::En));
    let fr = build_prompt(&request(Language::Fr));
    let zh = build_prompt(&request(Language::Zh));

    assert!(en.starts_with("Acting as an HVAC engineer"));
    assert!(en.contains("office of 24 square meters"));
    assert!(en.contains("\"west facing, two monitors\""));
    assert!(fr.starts_with("En tant qu'ingénieur CVC"));
    assert!(fr.contains("de 24 mètres carrés"));
    assert!(zh.contains("24平方米"));
    assert!(zh.contains("100"));
}
