use serde::{Deserialize, Serialize};

use crate::domain::common::catalog_item::{CatalogItem, Discount, Money};
use crate::shared::serde_lenient::{null_as_default, price_amount};

/// Field of the `data` response holding the ranked recommendations
pub const TOP_RECOMMENDATIONS_FIELD: &str = "topRecommendations";

/// How many recommendations the magazine asks for
pub const DEFAULT_TOP_N: usize = 24;

/// One ranked recommendation as the service emits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub name: String,

    #[serde(deserialize_with = "price_amount")]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

impl From<RecommendationRecord> for CatalogItem {
    fn from(r: RecommendationRecord) -> Self {
        CatalogItem::new(r.name, Money::ron(r.price), Discount::from_raw(r.discount))
            .with_image(r.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maps_to_card_item() {
        let raw = r#"{"name": "Vin Jidvei", "price": 20, "discount": 25, "imageUrl": "/Vin Jidvei.png"}"#;
        let record: RecommendationRecord = serde_json::from_str(raw).unwrap();
        let item: CatalogItem = record.into();

        assert_eq!(item.name, "Vin Jidvei");
        assert_eq!(item.unit_price, Money::ron(20.0));
        assert_eq!(item.discount.percent(), 25);
        assert_eq!(item.image_url, "/Vin Jidvei.png");
        assert!(item.purchase.is_none());
        assert_eq!(item.price_display().current, "15.00 RON");
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let raw = r#"{"name": "Apa", "price": "2.5 RON"}"#;
        let item: CatalogItem = serde_json::from_str::<RecommendationRecord>(raw)
            .unwrap()
            .into();
        assert!(!item.discount.is_active());
        assert_eq!(item.price_display().current, "2.5 RON");
    }
}
