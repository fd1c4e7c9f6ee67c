//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};
use recycle_me_common::{ACCEPTED_MIME, SUPPORTED_FORMATS_TEXT};

#[component]
pub fn UploadArea<F>(
    enabled: Signal<bool>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div class=move || {
            let mut classes = vec!["upload-card"];
            if !enabled.get() {
                classes.push("disabled");
            }
            classes.join(" ")
        }>
            <p class="text-muted">"Upload your image to identify recyclable items"</p>

            <label class="btn btn-primary upload-button">
                "Upload Image"
                <input
                    type="file"
                    class="visually-hidden"
                    accept=ACCEPTED_MIME
                    disabled=move || !enabled.get()
                    on:change=on_change
                />
            </label>

            <p class="caption">{SUPPORTED_FORMATS_TEXT}</p>

            {move || (!enabled.get()).then(|| view! {
                <p class="text-muted">"Enter your Gemini API key above to start."</p>
            })}
        </div>
    }
}
