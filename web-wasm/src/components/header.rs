//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="gradient-title">"Recycle Me"</h1>
            <p class="tagline">"Turn your waste into a better future"</p>
        </header>
    }
}
