//! メインアプリケーションコンポーネント
//!
//! Geminiクライアントはここで組み立て、ビューへ注入する。

use leptos::prelude::*;
use crate::api::GeminiClient;
use crate::components::{
    header::Header,
    settings_panel::SettingsPanel,
    upload_analysis_view::UploadAnalysisView,
    feature_cards::FeatureCards,
};
use crate::config::AppConfig;

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let has_injected_key = config.has_injected_key();
    let model = config.model.clone();
    let (api_key, set_api_key) = signal(config.api_key.unwrap_or_default());

    // キーが変わるたびにクライアントを作り直す
    let client = Memo::new(move |_| GeminiClient::from_key(&api_key.get(), model.as_deref()));

    view! {
        <div class="page">
            <div class="container">
                <Header />

                <Show when=move || !has_injected_key>
                    <SettingsPanel api_key=api_key set_api_key=set_api_key />
                </Show>

                <UploadAnalysisView analyzer=Signal::derive(move || client.get()) />

                <FeatureCards />
            </div>
        </div>
    }
}
