//! キャッシュ機能テスト
//!
//! 解析結果キャッシュの動作を検証

use async_trait::async_trait;
use chrono::Utc;
use recycle_me::analyzer::cache::{payload_hash, CacheEntry, CacheFile, CachingAnalyzer};
use recycle_me_common::{Error, ImageAnalyzer, ImagePayload};
use std::cell::Cell;
use tempfile::tempdir;

/// 呼び出し回数を数える解析クライアント
struct CountingAnalyzer {
    calls: Cell<usize>,
    fail: bool,
}

impl CountingAnalyzer {
    fn new(fail: bool) -> Self {
        Self { calls: Cell::new(0), fail }
    }
}

#[async_trait(?Send)]
impl ImageAnalyzer for CountingAnalyzer {
    async fn analyze(&self, _prompt: &str, _payload: &ImagePayload) -> recycle_me_common::Result<String> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(Error::Remote("API error: 500".into()))
        } else {
            Ok(format!("1. Can - Recyclable (aluminium) #{}", self.calls.get()))
        }
    }
}

fn payload(data: &str) -> ImagePayload {
    ImagePayload {
        data: data.to_string(),
        mime_type: "image/jpeg".to_string(),
    }
}

fn entry(model: &str, text: &str) -> CacheEntry {
    CacheEntry {
        model: model.to_string(),
        mime_type: "image/jpeg".to_string(),
        text: text.to_string(),
        analyzed_at: Utc::now(),
    }
}

/// 空のキャッシュファイル
#[test]
fn test_cache_file_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = CacheFile::load(dir.path());

    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

/// キャッシュの保存と読み込み
#[test]
fn test_cache_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut cache = CacheFile::load(dir.path());
    cache.insert("abc123".to_string(), entry("gemini-1.5-flash", "1. Box - Recyclable (cardboard)"));
    cache.save(dir.path()).expect("キャッシュ保存失敗");

    let loaded = CacheFile::load(dir.path());
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded.get("abc123", "gemini-1.5-flash"),
        Some("1. Box - Recyclable (cardboard)")
    );
}

/// モデルが違うエントリはヒットしない
#[test]
fn test_cache_model_mismatch() {
    let mut cache = CacheFile::default();
    cache.insert("abc123".to_string(), entry("gemini-1.5-flash", "text"));

    assert!(cache.get("abc123", "gemini-2.0-flash").is_none());
    assert!(cache.get("missing", "gemini-1.5-flash").is_none());
}

/// 壊れたキャッシュファイルは空として扱う
#[test]
fn test_cache_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(CacheFile::cache_path(dir.path()), "{ not json").unwrap();

    let cache = CacheFile::load(dir.path());
    assert!(cache.is_empty());
}

/// キャッシュ削除
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert!(!CacheFile::clear(dir.path()).unwrap());

    CacheFile::default().save(dir.path()).unwrap();
    assert!(CacheFile::clear(dir.path()).unwrap());
    assert!(!CacheFile::cache_path(dir.path()).exists());
}

/// ハッシュはデータとMIMEタイプで決まる
#[test]
fn test_payload_hash() {
    let a = payload_hash(&payload("AAAA"));
    let b = payload_hash(&payload("AAAA"));
    let c = payload_hash(&payload("BBBB"));
    let png = payload_hash(&ImagePayload { data: "AAAA".into(), mime_type: "image/png".into() });

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, png);
    assert_eq!(a.len(), 64);
}

/// 同じ画像は2回目からキャッシュを返す
#[tokio::test]
async fn test_caching_analyzer_hit() {
    let caching = CachingAnalyzer::new(CountingAnalyzer::new(false), "gemini-1.5-flash", CacheFile::default());

    let first = caching.analyze("prompt", &payload("AAAA")).await.unwrap();
    let second = caching.analyze("prompt", &payload("AAAA")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(caching.hits(), 1);
    assert_eq!(caching.into_cache().len(), 1);
}

/// 失敗した応答はキャッシュしない
#[tokio::test]
async fn test_caching_analyzer_skips_failures() {
    let caching = CachingAnalyzer::new(CountingAnalyzer::new(true), "gemini-1.5-flash", CacheFile::default());

    assert!(caching.analyze("prompt", &payload("AAAA")).await.is_err());
    assert!(caching.analyze("prompt", &payload("AAAA")).await.is_err());

    assert_eq!(caching.hits(), 0);
    assert!(caching.into_cache().is_empty());
}
