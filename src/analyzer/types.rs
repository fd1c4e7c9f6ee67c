use recycle_me_common::UploadState;
use serde::{Deserialize, Serialize};

/// 1枚分の解析結果（--json 出力用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub mime_type: String,

    /// 最終表示状態（succeeded / failed）
    #[serde(flatten)]
    pub state: UploadState,
}

impl AnalysisRecord {
    pub fn is_success(&self) -> bool {
        matches!(self.state, UploadState::Succeeded(_))
    }
}
