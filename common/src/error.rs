//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 読み込み失敗もAPI失敗も、画面上では同じ汎用メッセージに畳み込まれる。
/// ここで保持する詳細は診断ログ専用。
#[derive(Error, Debug)]
pub enum Error {
    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Image is empty")]
    EmptyImage,

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Remote service returned no text")]
    EmptyResponse,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
