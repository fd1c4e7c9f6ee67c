//! 画像読み込み・リモート解析の境界と解析パイプライン
//!
//! ファイル読み込み（ブラウザのFileReader / ローカルファイル）と
//! リモート解析クライアント（fetch / reqwest）はトレイトで差し替える。
//! WASMのFutureはSendでないため `?Send` で定義する。

use async_trait::async_trait;

use crate::error::Result;
use crate::payload::build_payload;
use crate::prompts::build_recycling_prompt;
use crate::types::{ImagePayload, ImagePreview, SelectedFile};

/// 選択された画像の読み込み元
#[async_trait(?Send)]
pub trait ImageSource {
    /// ファイルのメタデータ
    fn file(&self) -> SelectedFile;

    /// Base64のData URLとして読み込む
    async fn read_data_url(&self) -> Result<String>;
}

/// リモート画像解析サービス
#[async_trait(?Send)]
pub trait ImageAnalyzer {
    /// プロンプトと画像を送り、応答テキストをそのまま返す
    async fn analyze(&self, prompt: &str, payload: &ImagePayload) -> Result<String>;
}

/// プレビュー読み込み
pub async fn preview_file<S>(source: &S) -> Result<ImagePreview>
where
    S: ImageSource + ?Sized,
{
    let data_url = source.read_data_url().await?;
    Ok(ImagePreview::new(data_url))
}

/// 解析パイプライン
///
/// 読み込み → ペイロード作成 → リモート呼び出し を1本の非同期処理で行う。
/// どの段階のエラーもそのまま返す（リトライしない）。
pub async fn analyze_file<S, A>(source: &S, analyzer: &A) -> Result<String>
where
    S: ImageSource + ?Sized,
    A: ImageAnalyzer + ?Sized,
{
    let file = source.file();
    let data_url = source.read_data_url().await?;
    let payload = build_payload(&data_url, &file.mime_type)?;

    tracing::debug!(
        file = %file.name,
        mime = %payload.mime_type,
        bytes = payload.data.len(),
        "sending image for analysis"
    );

    let prompt = build_recycling_prompt();
    analyzer.analyze(&prompt, &payload).await
}
