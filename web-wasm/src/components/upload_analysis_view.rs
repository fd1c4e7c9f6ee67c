//! アップロード解析ビュー
//!
//! ファイル選択ごとにプレビュー読み込みと解析を並行して開始する。
//! 完了時の状態更新は `UploadView` がチケットで古い選択を弾く。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo::console;
use recycle_me_common::{analyze_file, preview_file, ImageAnalyzer, ImageSource, UploadView};
use crate::components::{result_panel::ResultPanel, upload_area::UploadArea};
use crate::file_reader::BrowserImage;

/// 選択された画像のプレビュー読み込みと解析を開始する
///
/// 状態は即座に Loading になり、2つのタスクの結果はチケット付きで反映される。
pub fn start_selection<S, A>(view_state: RwSignal<UploadView>, image: S, analyzer: A)
where
    S: ImageSource + Clone + 'static,
    A: ImageAnalyzer + 'static,
{
    let Some(ticket) = view_state.try_update(|v| v.on_file_selected(image.file())) else {
        return;
    };

    let preview_image = image.clone();
    spawn_local(async move {
        let result = preview_file(&preview_image).await;
        if let Err(e) = &result {
            console::warn!(format!("Preview read failed: {}", e));
        }
        let _ = view_state.try_update(|v| v.finish_preview(ticket, result));
    });

    spawn_local(async move {
        let result = analyze_file(&image, &analyzer).await;
        if let Err(e) = &result {
            console::error!(format!("Error analyzing image: {}", e));
        }
        let _ = view_state.try_update(|v| v.finish_analysis(ticket, result));
    });
}

#[component]
pub fn UploadAnalysisView<A>(analyzer: Signal<Option<A>>) -> impl IntoView
where
    A: ImageAnalyzer + Clone + Send + Sync + 'static,
{
    let view_state = RwSignal::new(UploadView::new());
    let enabled = Signal::derive(move || analyzer.with(|a| a.is_some()));

    let on_file_selected = move |file: web_sys::File| {
        let Some(client) = analyzer.get_untracked() else {
            return;
        };
        start_selection(view_state, BrowserImage::new(file), client);
    };

    let state = Memo::new(move |_| view_state.with(|v| v.state().clone()));
    let preview = Memo::new(move |_| view_state.with(|v| v.preview().map(|p| p.data_url.clone())));
    let file_name = Memo::new(move |_| {
        view_state.with(|v| v.file().map(|f| f.name.clone()).unwrap_or_default())
    });
    let oversized = Memo::new(move |_| {
        view_state.with(|v| v.file().is_some_and(|f| f.exceeds_advisory_limit()))
    });

    view! {
        <section class="upload-analysis">
            <UploadArea enabled=enabled on_file_selected=on_file_selected />

            <Show when=move || oversized.get()>
                <p class="text-warning">"This image is larger than 10MB and may take longer to analyze."</p>
            </Show>

            {move || preview.get().map(|src| view! {
                <div class="preview">
                    <img src=src alt=move || file_name.get() />
                </div>
            })}

            <ResultPanel state=state />
        </section>
    }
}
