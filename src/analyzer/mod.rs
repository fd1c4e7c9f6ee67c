//! ローカル画像の解析
//!
//! Webビューと同じ `UploadView` を使い、1枚ごとに
//! 選択 → プレビュー読み込みと解析を並行 → 表示状態の確定 を行う。

pub mod cache;
mod gemini_api;
mod types;

pub use cache::{CacheFile, CachingAnalyzer};
pub use gemini_api::GeminiClient;
pub use types::AnalysisRecord;

use crate::scanner::LocalImage;
use recycle_me_common::{analyze_file, preview_file, ImageAnalyzer, ImageSource, UploadState, UploadView};
use std::cell::RefCell;

/// 1回のファイル選択を最後まで実行し、最終状態を返す
///
/// プレビューと解析はどちらが先に終わってもよい。
pub async fn run_selection<S, A>(view: &RefCell<UploadView>, source: &S, analyzer: &A) -> UploadState
where
    S: ImageSource + ?Sized,
    A: ImageAnalyzer + ?Sized,
{
    let ticket = view.borrow_mut().on_file_selected(source.file());

    let preview = async {
        let result = preview_file(source).await;
        view.borrow_mut().finish_preview(ticket, result);
    };
    let analysis = async {
        let result = analyze_file(source, analyzer).await;
        view.borrow_mut().finish_analysis(ticket, result);
    };
    futures::join!(preview, analysis);

    view.borrow().state().clone()
}

/// 画像を順に解析する
///
/// `on_start` は各画像の選択直後（Loading）、`on_done` は確定後に呼ばれる。
pub async fn analyze_images<A, FS, FD>(
    images: &[LocalImage],
    analyzer: &A,
    mut on_start: FS,
    mut on_done: FD,
) -> Vec<AnalysisRecord>
where
    A: ImageAnalyzer + ?Sized,
    FS: FnMut(usize, &LocalImage),
    FD: FnMut(usize, &AnalysisRecord),
{
    let view = RefCell::new(UploadView::new());
    let mut records = Vec::with_capacity(images.len());

    for (i, image) in images.iter().enumerate() {
        on_start(i, image);
        let state = run_selection(&view, image, analyzer).await;

        let record = AnalysisRecord {
            file_name: image.file.name.clone(),
            file_path: image.path.display().to_string(),
            mime_type: image.file.mime_type.clone(),
            state,
        };
        on_done(i, &record);
        records.push(record);
    }

    records
}
