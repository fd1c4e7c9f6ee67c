//! Recycle Me Common Library
//!
//! CLIとWeb(WASM)で共有される状態管理・ペイロード変換・Gemini API型

pub mod types;
pub mod error;
pub mod payload;
pub mod prompts;
pub mod gemini;
pub mod analyzer;
pub mod view;

pub use types::{
    UploadState, SelectedFile, ImagePreview, ImagePayload,
    ANALYSIS_FAILED_MESSAGE, ACCEPTED_MIME, ADVISORY_MAX_BYTES, SUPPORTED_FORMATS_TEXT,
};
pub use error::{Error, Result};
pub use payload::{build_payload, extract_base64_from_data_url, extract_mime_type_from_data_url, to_data_url};
pub use prompts::build_recycling_prompt;
pub use gemini::{GeminiRequest, GeminiResponse, DEFAULT_MODEL, endpoint_url, model_url, parse_response_text};
pub use analyzer::{ImageSource, ImageAnalyzer, analyze_file, preview_file};
pub use view::{UploadView, SelectionTicket};
