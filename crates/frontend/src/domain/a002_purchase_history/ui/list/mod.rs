use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_box::{EmptyBox, ErrorBox, LoadingBox};
use crate::shared::icons::icon;
use crate::shared::page_context::{bind_to_person_query, use_catalog_config};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::catalog_item::CatalogItem;
use contracts::shared::catalog_view::CatalogViewState;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseRow {
    pub image_url: String,
    pub name: String,
    pub amount: String,
    pub price: String,
    pub discount: String,
    pub category: String,
    pub subcategory: String,
    pub healthy_index: String,
}

impl From<&CatalogItem> for PurchaseRow {
    fn from(item: &CatalogItem) -> Self {
        let facts = item.purchase.as_ref();
        Self {
            image_url: item.image_url.clone(),
            name: item.name.clone(),
            amount: facts.map(|f| f.amount.to_string()).unwrap_or_default(),
            price: item.unit_price.label(),
            discount: item.discount_label(),
            category: facts.map(|f| f.category.clone()).unwrap_or_default(),
            subcategory: facts.map(|f| f.subcategory.clone()).unwrap_or_default(),
            healthy_index: facts.map(|f| f.healthy_index.to_string()).unwrap_or_default(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PurchaseHistoryList() -> impl IntoView {
    let config = use_catalog_config();
    let state = RwSignal::new(CatalogViewState::new(config.page_size));

    bind_to_person_query(state, "purchase history", |client, id| async move {
        client.fetch_purchase_history(id).await
    });

    let navigate = use_navigate();
    let generate_magazine = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = state.with_untracked(|s| s.person_id()) {
            navigate(&AppRoute::Magazine.href(id), Default::default());
        }
    };

    let rows = move || {
        state.with(|s| s.visible_items().iter().map(PurchaseRow::from).collect::<Vec<_>>())
    };

    let table = move || {
        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Product Name"</th>
                            <th class="table__header-cell table__header-cell--right">"Amount"</th>
                            <th class="table__header-cell table__header-cell--right">"Price"</th>
                            <th class="table__header-cell table__header-cell--right">"Discount"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Subcategory"</th>
                            <th class="table__header-cell table__header-cell--right">"Healthy Index"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <img class="table__thumb" src=row.image_url alt=row.name.clone() />
                                </td>
                                <td class="table__cell">{row.name}</td>
                                <td class="table__cell table__cell--right">{row.amount}</td>
                                <td class="table__cell table__cell--right">{row.price}</td>
                                <td class="table__cell table__cell--right">{row.discount}</td>
                                <td class="table__cell">{row.category}</td>
                                <td class="table__cell">{row.subcategory}</td>
                                <td class="table__cell table__cell--right">{row.healthy_index}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
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
        <PageFrame page_id="a002_purchase_history--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Purchase history"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=generate_magazine
                        disabled=move || state.with(|s| s.status().ready().is_none())
                    >
                        {icon("magazine")}
                        "Generate Magazine"
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
                    return view! { <EmptyBox message="No purchases found for this person." /> }
                        .into_any();
                }
                table().into_any()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::catalog_item::{Discount, Money, PurchaseFacts};

    #[test]
    fn test_row_columns() {
        let item = CatalogItem::new("Iaurt", Money::ron(3.5), Discount::new(20))
            .with_image("/iaurt.png")
            .with_purchase(PurchaseFacts {
                amount: 4,
                category: "Lactate".to_string(),
                subcategory: "Iaurt".to_string(),
                healthy_index: 8.0,
                basic_needs_index: 1.0,
            });
        let row = PurchaseRow::from(&item);

        assert_eq!(row.amount, "4");
        assert_eq!(row.price, "3.5 RON");
        assert_eq!(row.discount, "20%");
        assert_eq!(row.category, "Lactate");
        assert_eq!(row.healthy_index, "8");
    }

    #[test]
    fn test_row_without_discount() {
        let item = CatalogItem::new("Apa", Money::ron(2.0), Discount::default());
        let row = PurchaseRow::from(&item);
        assert_eq!(row.discount, "-");
        assert_eq!(row.amount, "");
    }
}
