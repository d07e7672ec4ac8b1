use contracts::domain::common::catalog_item::CatalogItem;
use leptos::prelude::*;

/// Magazine card: image, name and price, with the discount bubble and the
/// struck-through original price only when a discount applies.
#[component]
pub fn ProductCard(item: CatalogItem) -> impl IntoView {
    let price = item.price_display();
    let has_discount = price.badge.is_some();

    view! {
        <div class="product-card" class:product-card--discounted=has_discount>
            <div class="product-card__image">
                <img src=item.image_url.clone() alt=item.name.clone() loading="lazy" />
                {price.badge.map(|badge| view! {
                    <span class="product-card__badge">{badge}</span>
                })}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{item.name}</h3>
                <div class="product-card__price">
                    <span class="product-card__price-current">{price.current}</span>
                    {price.original.map(|original| view! {
                        <span class="product-card__price-original">
                            <s>{original}</s>
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}
