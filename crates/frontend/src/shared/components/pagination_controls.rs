use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next buttons around a "page / pages" label.
///
/// Enabled state comes straight from the pagination controller, so the
/// buttons can never request a page outside the collection.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    can_retreat: Signal<bool>,

    #[prop(into)]
    can_advance: Signal<bool>,

    /// e.g. "2 / 5"
    #[prop(into)]
    label: Signal<String>,

    on_retreat: Callback<()>,

    on_advance: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_retreat.run(())
                disabled=move || !can_retreat.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_advance.run(())
                disabled=move || !can_advance.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
