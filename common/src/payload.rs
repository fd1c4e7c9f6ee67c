//! Data URL → 送信ペイロード変換
//!
//! "data:image/jpeg;base64,/9j/4AAQ..." の先頭から最初のカンマまでを除去し、
//! 残りのBase64データを宣言MIMEタイプと組にする。

use crate::error::{Error, Result};
use crate::types::ImagePayload;

/// MIMEタイプが判別できない場合のデフォルト
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Data URLからBase64データ部分を抽出
///
/// 最初のカンマまで（カンマを含む）を取り除いた残りを返す。
/// カンマが無い場合はNone。
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, data)| data)
}

/// Data URLからMIMEタイプを抽出
///
/// "data:" ヘッダに含まれない場合はNone
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    let header = data_url.split_once(',').map(|(h, _)| h).unwrap_or(data_url);
    let mime = header
        .strip_prefix("data:")?
        .split(';')
        .next()
        .filter(|s| !s.is_empty())?;
    Some(mime)
}

/// 送信ペイロードを組み立てる
///
/// # Arguments
/// * `data_url` - ファイル読み込み結果のData URL
/// * `declared_mime` - ファイルの宣言MIMEタイプ（空ならData URLのヘッダ → image/jpeg）
pub fn build_payload(data_url: &str, declared_mime: &str) -> Result<ImagePayload> {
    let data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::InvalidDataUrl(truncate(data_url, 32)))?;

    if data.trim().is_empty() {
        return Err(Error::EmptyImage);
    }

    let mime_type = if declared_mime.trim().is_empty() {
        extract_mime_type_from_data_url(data_url).unwrap_or(DEFAULT_MIME_TYPE)
    } else {
        declared_mime.trim()
    };

    Ok(ImagePayload {
        data: data.to_string(),
        mime_type: mime_type.to_string(),
    })
}

/// Base64データからData URLを組み立てる
pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
