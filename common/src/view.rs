//! アップロード解析ビューの状態管理
//!
//! ファイル選択ごとに `SelectionTicket` を発行し、非同期処理の完了時には
//! そのチケットが最新のものかを確認してから状態を更新する。
//! 古い選択の応答が新しい選択の表示を上書きすることはない。

use crate::error::Error;
use crate::types::{ImagePreview, SelectedFile, UploadState, ANALYSIS_FAILED_MESSAGE};

/// ファイル選択ごとの世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionTicket(u64);

/// ビューのローカル状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadView {
    state: UploadState,
    preview: Option<ImagePreview>,
    file: Option<SelectedFile>,
    generation: u64,
}

impl UploadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// チケットが最新の選択に対応しているか
    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        self.generation != 0 && ticket.0 == self.generation
    }

    /// ファイル選択: 即座にLoadingへ遷移し、前回のプレビューを破棄する
    pub fn on_file_selected(&mut self, file: SelectedFile) -> SelectionTicket {
        self.generation += 1;

        if file.exceeds_advisory_limit() {
            tracing::warn!(file = %file.name, size = file.size, "file is larger than the advised 10MB");
        }
        tracing::debug!(file = %file.name, generation = self.generation, "file selected");

        self.state = UploadState::Loading;
        self.preview = None;
        self.file = Some(file);
        SelectionTicket(self.generation)
    }

    /// プレビュー読み込み完了（UploadStateは変更しない）
    pub fn on_preview_ready(&mut self, ticket: SelectionTicket, data_url: String) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(generation = ticket.0, "stale preview ignored");
            return false;
        }
        self.preview = Some(ImagePreview::new(data_url));
        true
    }

    /// プレビュー読み込み失敗（ログのみ）
    pub fn on_preview_failed(&mut self, ticket: SelectionTicket, error: &Error) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        tracing::warn!(error = %error, "preview read failed");
        true
    }

    /// 解析成功
    pub fn on_analysis_complete(&mut self, ticket: SelectionTicket, text: String) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(generation = ticket.0, "stale analysis result ignored");
            return false;
        }
        self.state = UploadState::Succeeded(text);
        true
    }

    /// 解析失敗: 詳細はログへ、画面には固定メッセージ
    pub fn on_analysis_failed(&mut self, ticket: SelectionTicket, error: &Error) -> bool {
        tracing::error!(generation = ticket.0, error = %error, "error analyzing image");
        if !self.is_current(ticket) {
            return false;
        }
        self.state = UploadState::Failed(ANALYSIS_FAILED_MESSAGE.to_string());
        true
    }

    /// 解析結果の振り分け
    pub fn finish_analysis(
        &mut self,
        ticket: SelectionTicket,
        result: crate::error::Result<String>,
    ) -> bool {
        match result {
            Ok(text) => self.on_analysis_complete(ticket, text),
            Err(e) => self.on_analysis_failed(ticket, &e),
        }
    }

    /// プレビュー結果の振り分け
    pub fn finish_preview(
        &mut self,
        ticket: SelectionTicket,
        result: crate::error::Result<ImagePreview>,
    ) -> bool {
        match result {
            Ok(preview) => self.on_preview_ready(ticket, preview.data_url),
            Err(e) => self.on_preview_failed(ticket, &e),
        }
    }

    /// 初期状態へ戻す（アンマウント時）
    ///
    /// 世代番号は進めるので、実行中の処理の完了はすべて無視される。
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = UploadState::Idle;
        self.preview = None;
        self.file = None;
    }
}
