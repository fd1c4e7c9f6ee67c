//! 機能紹介カード

use leptos::prelude::*;

pub const FEATURES: &[(&str, &str)] = &[
    ("Instant Analysis", "Get immediate feedback on recyclable items"),
    ("Smart Detection", "AI-powered recognition of materials"),
    ("Eco Impact", "Track your recycling contribution"),
];

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="feature-grid">
            {FEATURES
                .iter()
                .map(|(title, description)| {
                    view! {
                        <div class="feature-card">
                            <h3>{*title}</h3>
                            <p class="text-muted">{*description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
