//! 画面状態と画像データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadState: 表示状態（Idle / Loading / Succeeded / Failed）
//! - SelectedFile: 選択されたファイルのメタデータ
//! - ImagePreview: プレビュー用Data URL
//! - ImagePayload: リモート送信用のBase64データ

use serde::{Deserialize, Serialize};

/// 解析失敗時にユーザーへ表示する固定メッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "Error analyzing image. Please try again.";

/// ファイル選択で受け付けるMIMEタイプ
pub const ACCEPTED_MIME: &str = "image/*";

/// 推奨最大サイズ（案内のみ、ロジックでは制限しない）
pub const ADVISORY_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// アップロード欄の案内文
pub const SUPPORTED_FORMATS_TEXT: &str = "Supported formats: JPG, PNG, GIF (max 10MB)";

/// 表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "text", rename_all = "camelCase")]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl UploadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Loading => "loading",
            UploadState::Succeeded(_) => "succeeded",
            UploadState::Failed(_) => "failed",
        }
    }

    /// 画面に出す本文（Succeeded/Failedのみ）
    pub fn text(&self) -> Option<&str> {
        match self {
            UploadState::Succeeded(text) | UploadState::Failed(text) => Some(text),
            _ => None,
        }
    }
}

/// 選択されたファイル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    /// ブラウザ/拡張子から宣言されたMIMEタイプ（空の場合あり）
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// 推奨サイズを超えているか（警告表示用）
    pub fn exceeds_advisory_limit(&self) -> bool {
        self.size > ADVISORY_MAX_BYTES
    }
}

/// プレビュー（Data URL）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub data_url: String,
}

impl ImagePreview {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self { data_url: data_url.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }
}

/// リモート送信用ペイロード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Base64データ（Data URLのプレフィックス除去済み）
    pub data: String,
    pub mime_type: String,
}
