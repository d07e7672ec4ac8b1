use crate::shared::page_context::use_person_query;
use contracts::domain::a001_person::aggregate::PersonId;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

/// Links of the header menu for the person in the URL; empty without a valid id
pub fn menu_links(raw_id: Option<&str>) -> Vec<(&'static str, String)> {
    match PersonId::validate_optional(raw_id) {
        Ok(id) => vec![
            ("Purchases", AppRoute::PurchaseHistory.href(id)),
            ("Magazine", AppRoute::Magazine.href(id)),
            ("Recipe", AppRoute::Recipe.href(id)),
        ],
        Err(_) => Vec::new(),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let raw_id = use_person_query();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href=AppRoute::Search.path() attr:class="header__logo">
                    <img src="/logo.svg" alt="Product Magazine" class="header__logo-image" />
                </A>
                <span class="header__title">"Product Magazine"</span>
            </div>
            <nav class="header__actions">
                {move || {
                    menu_links(raw_id.get().as_deref())
                        .into_iter()
                        .map(|(label, href)| view! {
                            <A href=href attr:class="button button--ghost">{label}</A>
                        })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_follows_identifier() {
        let links = menu_links(Some("12"));
        assert_eq!(links[0], ("Purchases", "/data?id=12".to_string()));
        assert_eq!(links[2].1, "/llm?id=12");
        assert!(menu_links(Some("99")).is_empty());
        assert!(menu_links(None).is_empty());
    }
}
