use recycle_me::analyzer::GeminiClient;
use recycle_me_common::{build_recycling_prompt, ImageAnalyzer, ImagePayload, DEFAULT_MODEL};
use std::time::Duration;

/// 1x1 の白いPNG
const WHITE_PIXEL_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";

#[tokio::test]
async fn gemini_image_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let client = GeminiClient::new(api_key, DEFAULT_MODEL.to_string(), Duration::from_secs(60))
        .expect("client build failed");

    let payload = ImagePayload {
        data: WHITE_PIXEL_PNG.to_string(),
        mime_type: "image/png".to_string(),
    };

    let text = client
        .analyze(&build_recycling_prompt(), &payload)
        .await
        .expect("gemini api call failed");

    assert!(!text.trim().is_empty());
}

#[tokio::test]
async fn gemini_rejects_invalid_key() {
    if std::env::var("GEMINI_API_KEY").map(|k| k.trim().is_empty()).unwrap_or(true) {
        eprintln!("GEMINI_API_KEY not set; skipping integration test");
        return;
    }

    let client = GeminiClient::new("invalid-key".to_string(), DEFAULT_MODEL.to_string(), Duration::from_secs(30))
        .expect("client build failed");
    let payload = ImagePayload {
        data: WHITE_PIXEL_PNG.to_string(),
        mime_type: "image/png".to_string(),
    };

    let err = client
        .analyze("Describe", &payload)
        .await
        .expect_err("invalid key should fail");
    assert!(!format!("{}", err).contains("invalid-key"));
}
