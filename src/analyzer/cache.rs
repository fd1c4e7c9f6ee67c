//! 解析結果キャッシュモジュール
//!
//! 画像データのSHA-256をキーにして応答テキストをキャッシュし、
//! 同じ画像の再送信をスキップする。成功した応答だけを保存する。

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recycle_me_common::{ImageAnalyzer, ImagePayload};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".recycle-cache.json";

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// ハッシュ → 応答テキストのマップ
    entries: HashMap<String, CacheEntry>,
}

/// キャッシュエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub model: String,
    pub mime_type: String,
    pub text: String,
    pub analyzed_at: DateTime<Utc>,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み（無い・壊れている場合は空）
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        let Ok(file) = File::open(&cache_path) else {
            return Self::default();
        };

        match serde_json::from_reader::<_, CacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                tracing::warn!("cache version mismatch, starting fresh");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "cache file unreadable, starting fresh");
                Self::default()
            }
        }
    }

    /// キャッシュファイルを保存
    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// キャッシュファイルを削除（存在しなければfalse）
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(cache_path)?;
        Ok(true)
    }

    /// キャッシュをルックアップ（モデルが一致するもののみ）
    pub fn get(&self, hash: &str, model: &str) -> Option<&str> {
        self.entries
            .get(hash)
            .filter(|e| e.model == model)
            .map(|e| e.text.as_str())
    }

    /// キャッシュに追加
    pub fn insert(&mut self, hash: String, entry: CacheEntry) {
        self.entries.insert(hash, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// ペイロードのハッシュ（SHA-256, hex）
pub fn payload_hash(payload: &ImagePayload) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.mime_type.as_bytes());
    hasher.update(b"\n");
    hasher.update(payload.data.as_bytes());
    hex::encode(hasher.finalize())
}

/// キャッシュ付き解析クライアント
///
/// 内側のクライアントを呼ぶ前にキャッシュを引き、成功した応答を記録する。
pub struct CachingAnalyzer<A> {
    inner: A,
    model: String,
    cache: RefCell<CacheFile>,
    hits: Cell<usize>,
}

impl<A> CachingAnalyzer<A> {
    pub fn new(inner: A, model: impl Into<String>, cache: CacheFile) -> Self {
        Self {
            inner,
            model: model.into(),
            cache: RefCell::new(cache),
            hits: Cell::new(0),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn into_cache(self) -> CacheFile {
        self.cache.into_inner()
    }
}

#[async_trait(?Send)]
impl<A: ImageAnalyzer> ImageAnalyzer for CachingAnalyzer<A> {
    async fn analyze(&self, prompt: &str, payload: &ImagePayload) -> recycle_me_common::Result<String> {
        let hash = payload_hash(payload);

        let cached = self.cache.borrow().get(&hash, &self.model).map(str::to_string);
        if let Some(text) = cached {
            tracing::debug!(hash = %hash, "cache hit");
            self.hits.set(self.hits.get() + 1);
            return Ok(text);
        }

        let text = self.inner.analyze(prompt, payload).await?;
        self.cache.borrow_mut().insert(
            hash,
            CacheEntry {
                model: self.model.clone(),
                mime_type: payload.mime_type.clone(),
                text: text.clone(),
                analyzed_at: Utc::now(),
            },
        );
        Ok(text)
    }
}
