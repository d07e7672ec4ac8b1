use crate::domain::a001_person::ui::search::PersonSearch;
use crate::domain::a002_purchase_history::ui::list::PurchaseHistoryList;
use crate::domain::a003_recommendation::ui::magazine::MagazineCarousel;
use crate::domain::a004_generated_content::ui::recipe::RecipeView;
use crate::layout::Shell;
use crate::shared::components::status_box::EmptyBox;
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::from_build_env();
    log::info!(
        "Catalog config: api_base={}, catalog_base={}",
        config.api_base,
        config.catalog_base
    );
    // Injected once; the client and the views read it from context.
    provide_context(config);

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <EmptyBox message="Page not found." /> }>
                    <Route path=path!("/") view=PersonSearch />
                    <Route path=path!("/data") view=PurchaseHistoryList />
                    <Route path=path!("/products") view=MagazineCarousel />
                    <Route path=path!("/llm") view=RecipeView />
                </Routes>
            </Shell>
        </Router>
    }
}
