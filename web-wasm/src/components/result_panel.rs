//! 解析結果パネル
//!
//! 応答テキストは加工せず、空白・改行を保ったまま表示する。

use leptos::prelude::*;
use recycle_me_common::UploadState;

#[component]
pub fn ResultPanel(#[prop(into)] state: Signal<UploadState>) -> impl IntoView {
    view! {
        <div class=move || format!("result-panel {}", state.with(|s| s.as_str()))>
            {move || match state.get() {
                UploadState::Idle => ().into_any(),
                UploadState::Loading => view! {
                    <div class="spinner" aria-hidden="true" />
                    <p class="text-muted">"Analyzing your image..."</p>
                }
                .into_any(),
                UploadState::Succeeded(text) => view! {
                    <h3>"Analysis Result"</h3>
                    <div class="analysis-text" style="white-space: pre-wrap">{text}</div>
                }
                .into_any(),
                UploadState::Failed(message) => view! {
                    <p class="error-message" role="alert">{message}</p>
                }
                .into_any(),
            }}
        </div>
    }
}
