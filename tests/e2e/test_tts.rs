use crate::e2e::helpers;

use helpers::fake_engine::FAKE_WAV;
use helpers::TestContext;
use hyper::StatusCode;
use interlink_tts::controllers::tts::TtsResponse;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use test_context::test_context;

fn calls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(text, language)| (text.to_string(), language.to_string()))
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_text_to_speech(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Hello world",
                "language": "en (English)"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TtsResponse = response.json().unwrap();
    let audio_path = body.audio_path.expect("Expected an audio path");
    assert!(Path::new(&audio_path).exists());
    assert_eq!(ctx.engine.calls(), calls(&[("Hello world", "en")]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_no_audio_for_empty_text(ctx: &TestContext) {
    for body in [
        json!({ "text": "", "language": "en (English)" }),
        json!({ "language": "en (English)" }),
        json!({ "text": null, "language": "fr (French)" }),
    ] {
        let response = ctx.client.post("/api/tts/synthesize", &body).await.unwrap();
        response.assert_status(StatusCode::OK);

        let body: TtsResponse = response.json().unwrap();
        assert_eq!(body.audio_path, None);
    }

    // The engine must never be reached
    assert!(ctx.engine.calls().is_empty());
}

#[tokio::test]
async fn it_should_return_no_audio_when_engine_fails() {
    let ctx = TestContext::with_failing_engine().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Bonjour",
                "language": "fr (French)"
            }),
        )
        .await
        .unwrap();

    // Failures are not surfaced as errors
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body, &json!({ "audio_path": null }));
    assert_eq!(ctx.engine.calls(), calls(&[("Bonjour", "fr")]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_default_language_when_missing(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hi there" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.engine.calls(), calls(&[("Hi there", "en")]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_bare_language_code(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Bonjour",
                "language": "fr"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TtsResponse = response.json().unwrap();
    assert!(body.audio_path.is_some());
    assert_eq!(ctx.engine.calls(), calls(&[("Bonjour", "fr")]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_synthesized_audio(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Hello world",
                "language": "en (English)"
            }),
        )
        .await
        .unwrap();

    let body: TtsResponse = response.json().unwrap();
    let audio_path = body.audio_path.expect("Expected an audio path");
    let file_name = Path::new(&audio_path)
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string();

    let response = ctx
        .client
        .get(&format!("/api/tts/audio/{}", file_name))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("content-type").map(String::as_str),
        Some("audio/wav")
    );
    assert_eq!(response.body_bytes, FAKE_WAV);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_audio(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/tts/audio/tts_missing.wav")
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_audio_names_outside_output_directory(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/tts/audio/..%2F..%2Fetc%2Fpasswd")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid audio file name");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_synthesis_requests(ctx: &TestContext) {
    let mut futures = Vec::new();
    for i in 0..5 {
        let client = ctx.client.clone();
        futures.push(async move {
            client
                .post(
                    "/api/tts/synthesize",
                    &json!({
                        "text": format!("Request number {}", i),
                        "language": "en (English)"
                    }),
                )
                .await
        });
    }

    let results = futures::future::join_all(futures).await;

    let mut paths = Vec::new();
    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
        let body: TtsResponse = response.json().unwrap();
        paths.push(body.audio_path.expect("Expected an audio path"));
    }

    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 5);
    assert_eq!(ctx.engine.calls().len(), 5);
}
