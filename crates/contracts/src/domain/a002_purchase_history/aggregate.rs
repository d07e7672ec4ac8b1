use serde::{Deserialize, Serialize};

use crate::domain::common::catalog_item::{CatalogItem, Discount, Money, PurchaseFacts};
use crate::shared::serde_lenient::{index_or_unknown, null_as_default, price_amount};

/// Field of the `purchase-details` response holding the rows
pub const PURCHASE_DETAILS_FIELD: &str = "purchaseDetails";

/// One row of `purchase-details`, field names as the service emits them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "ProductName")]
    pub product_name: String,

    #[serde(rename = "Amount", default, deserialize_with = "null_as_default")]
    pub amount: f64,

    #[serde(rename = "Category", default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "HealthyIndex", default, deserialize_with = "null_as_default")]
    pub healthy_index: f64,

    #[serde(rename = "Price", deserialize_with = "price_amount")]
    pub price: f64,

    #[serde(rename = "Subcategory", default, deserialize_with = "null_as_default")]
    pub subcategory: String,

    #[serde(
        rename = "BasicNeedsIndex",
        default = "unknown_index",
        deserialize_with = "index_or_unknown"
    )]
    pub basic_needs_index: f64,

    #[serde(rename = "Discount", default, deserialize_with = "null_as_default")]
    pub discount: f64,

    #[serde(rename = "ImageURL", default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

fn unknown_index() -> f64 {
    crate::domain::common::catalog_item::UNKNOWN_INDEX
}

impl From<PurchaseRecord> for CatalogItem {
    fn from(r: PurchaseRecord) -> Self {
        let facts = PurchaseFacts {
            amount: r.amount.max(0.0).round() as u32,
            category: r.category,
            subcategory: r.subcategory,
            healthy_index: r.healthy_index,
            basic_needs_index: r.basic_needs_index,
        };

        CatalogItem::new(r.product_name, Money::ron(r.price), Discount::from_raw(r.discount))
            .with_image(r.image_url)
            .with_purchase(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maps_to_history_item() {
        let raw = r#"{
            "ProductName": "Lapte 1.5%",
            "Amount": 3.0,
            "Category": "Lactate",
            "HealthyIndex": 7.5,
            "Price": 6.49,
            "Subcategory": "Lapte",
            "BasicNeedsIndex": 1,
            "Discount": 10,
            "ImageURL": "https://cdn.example/lapte.png"
        }"#;
        let record: PurchaseRecord = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = record.into();

        assert_eq!(item.name, "Lapte 1.5%");
        assert_eq!(item.discount.percent(), 10);
        assert_eq!(item.image_url, "https://cdn.example/lapte.png");
        let facts = item.purchase.unwrap();
        assert_eq!(facts.amount, 3);
        assert_eq!(facts.category, "Lactate");
        assert_eq!(facts.subcategory, "Lapte");
        assert_eq!(facts.healthy_index, 7.5);
        assert_eq!(facts.basic_needs_index, 1.0);
    }

    #[test]
    fn test_optional_columns_default() {
        let raw = r#"{"ProductName": "Paine", "Price": "4,50", "Category": null}"#;
        let record: PurchaseRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.price, 4.5);
        assert_eq!(record.category, "");
        assert_eq!(record.discount, 0.0);
        assert_eq!(record.basic_needs_index, -1.0);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(serde_json::from_str::<PurchaseRecord>(r#"{"Price": 1}"#).is_err());
    }
}
