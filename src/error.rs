use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecycleMeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`recycle-me config --set-api-key YOUR_KEY` または環境変数 GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("解析エラー: {0}")]
    Analysis(#[from] recycle_me_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecycleMeError>;
