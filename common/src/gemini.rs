//! Gemini API リクエスト/レスポンス型
//!
//! 送信（fetch / reqwest）はそれぞれのクレートで行い、
//! ここではJSONの形とテキスト抽出だけを扱う。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ImagePayload;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// デフォルトモデル
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_TEMPERATURE: f32 = 0.4;

/// generateContent のURL（キーはヘッダで渡す場合）
pub fn model_url(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

/// generateContent のURL（キーをクエリに含める）
pub fn endpoint_url(model: &str, api_key: &str) -> String {
    format!("{}?key={}", model_url(model), api_key)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GeminiRequest {
    /// プロンプト + 画像1枚のリクエスト
    pub fn with_image(prompt: &str, payload: &ImagePayload) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            data: payload.data.clone(),
                            mime_type: payload.mime_type.clone(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// セーフティブロック時は省略される
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// 先頭候補のテキストを連結して返す（空白・改行はそのまま）
    pub fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(text)
    }
}

/// レスポンスJSON文字列からテキストを取り出す
pub fn parse_response_text(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    response.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ImagePayload {
        ImagePayload {
            data: "base64data".to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn test_endpoint_url() {
        let url = endpoint_url("gemini-1.5-flash", "KEY");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=KEY"
        );
    }

    #[test]
    fn test_model_url() {
        assert!(model_url("gemini-2.0-flash").ends_with("/models/gemini-2.0-flash:generateContent"));
    }

    #[test]
    fn test_request_serialize() {
        let request = GeminiRequest::with_image("List items", &payload());
        let value = serde_json::to_value(&request).expect("シリアライズ失敗");

        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "List items");
        assert_eq!(parts[1]["inlineData"]["data"], "base64data");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert!(value["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text { text: "Hello".to_string() };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_response_text_verbatim() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "1. Plastic bottle - Recyclable (PET)\n\n2. Can" }]
                }
            }]
        }"#;
        let text = parse_response_text(body).unwrap();
        assert_eq!(text, "1. Plastic bottle - Recyclable (PET)\n\n2. Can");
    }

    #[test]
    fn test_response_concatenates_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"1. Can"},{"text":"\n2. Jar"}]}}]}"#;
        assert_eq!(parse_response_text(body).unwrap(), "1. Can\n2. Jar");
    }

    #[test]
    fn test_response_whitespace_only_is_kept() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"\n  \n"}]}}]}"#;
        assert_eq!(parse_response_text(body).unwrap(), "\n  \n");
    }

    #[test]
    fn test_response_empty_text_part() {
        let result = parse_response_text(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#);
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_response_without_candidates() {
        let result = parse_response_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_response_candidate_without_content() {
        let result = parse_response_text(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_response_malformed() {
        let result = parse_response_text("<html>502</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
