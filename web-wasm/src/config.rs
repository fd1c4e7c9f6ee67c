//! ビルド時に注入される設定
//!
//! `RECYCLE_ME_GEMINI_API_KEY` / `RECYCLE_ME_GEMINI_MODEL` をビルド環境から読む。
//! 未設定の場合は設定パネルでAPIキーを入力する（メモリ上のみ保持）。

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("RECYCLE_ME_GEMINI_API_KEY"),
            option_env!("RECYCLE_ME_GEMINI_MODEL"),
        )
    }

    fn from_values(api_key: Option<&str>, model: Option<&str>) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            api_key: api_key.and_then(non_empty),
            model: model.and_then(non_empty),
        }
    }

    /// APIキーがビルド時に注入されているか
    pub fn has_injected_key(&self) -> bool {
        self.api_key.is_some()
    }
}
