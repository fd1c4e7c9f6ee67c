//! Gemini API連携（reqwest版）
//!
//! APIキーはURLではなく `x-goog-api-key` ヘッダで渡す。

use crate::error::{RecycleMeError, Result};
use async_trait::async_trait;
use recycle_me_common::{model_url, parse_response_text, GeminiRequest, ImageAnalyzer, ImagePayload};
use std::time::Duration;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecycleMeError::HttpClient(e.to_string()))?;

        Ok(Self { http, api_key, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait(?Send)]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, prompt: &str, payload: &ImagePayload) -> recycle_me_common::Result<String> {
        use recycle_me_common::Error;

        let request = GeminiRequest::with_image(prompt, payload);

        let response = self
            .http
            .post(model_url(&self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Remote(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Remote(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::debug!(%status, body = %body, "gemini api error body");
            return Err(Error::Remote(format!("API error: {}", status)));
        }

        parse_response_text(&body)
    }
}
