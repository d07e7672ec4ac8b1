use leptos::prelude::*;

/// Inline error banner
#[component]
pub fn ErrorBox(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error" role="alert">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">{message}</span>
        </div>
    }
}

#[component]
pub fn LoadingBox() -> impl IntoView {
    view! {
        <div class="loading-box" aria-busy="true">
            <span class="loading-box__spinner"></span>
            <span class="loading-box__text">"Loading..."</span>
        </div>
    }
}

/// Neutral placeholder for a successful but empty result
#[component]
pub fn EmptyBox(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-box">
            <span class="empty-box__text">{message}</span>
        </div>
    }
}
