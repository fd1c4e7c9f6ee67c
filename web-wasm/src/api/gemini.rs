//! Gemini API連携（ブラウザfetch版）
//!
//! クライアントはアプリのルートで生成し、ビューへ注入する。

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use recycle_me_common::{
    endpoint_url, Error, GeminiRequest, GeminiResponse, ImageAnalyzer, ImagePayload, Result,
    DEFAULT_MODEL,
};

/// Gemini APIクライアント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// APIキーが空ならNone
    pub fn from_key(api_key: &str, model: Option<&str>) -> Option<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(Self::new(api_key, model.unwrap_or(DEFAULT_MODEL)))
    }
}

#[async_trait(?Send)]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, prompt: &str, payload: &ImagePayload) -> Result<String> {
        let request = GeminiRequest::with_image(prompt, payload);
        let url = endpoint_url(&self.model, &self.api_key);

        let response = call_gemini_api(&url, &request)
            .await
            .map_err(|e| Error::Remote(js_error_message(&e)))?;

        response.into_text()
    }
}

/// Gemini API呼び出し
async fn call_gemini_api(url: &str, request: &GeminiRequest) -> std::result::Result<GeminiResponse, JsValue> {
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response)
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
