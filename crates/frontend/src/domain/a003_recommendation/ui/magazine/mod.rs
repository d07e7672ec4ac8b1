use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::product_card::ProductCard;
use crate::shared::components::status_box::{EmptyBox, ErrorBox, LoadingBox};
use crate::shared::icons::icon;
use crate::shared::page_context::{bind_to_person_query, use_catalog_config};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_GALLERY;
use contracts::shared::catalog_view::CatalogViewState;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Personalized magazine: the top recommendations as a card carousel
#[component]
#[allow(non_snake_case)]
pub fn MagazineCarousel() -> impl IntoView {
    let config = use_catalog_config();
    let top_n = config.top_n;
    let state = RwSignal::new(CatalogViewState::new(config.page_size));

    bind_to_person_query(state, "magazine", move |client, id| async move {
        client.fetch_recommendations(id, top_n).await
    });

    let navigate = use_navigate();
    let generate_recipe = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = state.with_untracked(|s| s.person_id()) {
            navigate(&AppRoute::Recipe.href(id), Default::default());
        }
    };

    let carousel = move || {
        view! {
            <div class="product-grid">
                {move || {
                    state
                        .with(|s| s.visible_items().to_vec())
                        .into_iter()
                        .map(|item| view! { <ProductCard item=item /> })
                        .collect_view()
                }}
            </div>

            <PaginationControls
                can_retreat=Signal::derive(move || state.with(|s| s.pager().can_retreat()))
                can_advance=Signal::derive(move || state.with(|s| s.pager().can_advance()))
                label=Signal::derive(move || state.with(|s| s.pager().page_label()))
                on_retreat=Callback::new(move |_| { state.update(|s| { s.retreat(); }); })
                on_advance=Callback::new(move |_| { state.update(|s| { s.advance(); }); })
            />
        }
    };

    view! {
        <PageFrame page_id="a003_recommendation--gallery" category=PAGE_CAT_GALLERY>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Your magazine this week"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=generate_recipe
                        disabled=move || state.with(|s| s.person_id().is_none())
                    >
                        {icon("recipe")}
                        "Generate Recipe"
                    </button>
                </div>
            </div>

            {move || {
                if state.with(|s| s.status().is_loading()) {
                    return view! { <LoadingBox /> }.into_any();
                }
                if let Some(message) = state.with(|s| s.status().error_message()) {
                    return view! { <ErrorBox message=message /> }.into_any();
                }
                if state.with(|s| s.is_empty()) {
                    return view! { <EmptyBox message="No recommendations yet." /> }.into_any();
                }
                carousel().into_any()
            }}
        </PageFrame>
    }
}
