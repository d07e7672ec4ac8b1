use serde::{Deserialize, Serialize};

/// Currency every price from the recommendation service is quoted in
pub const DEFAULT_CURRENCY: &str = "RON";

/// Basic-needs index reported when the service does not know it
pub const UNKNOWN_INDEX: f64 = -1.0;

/// Ordered items exactly as the service returned them (already ranked)
pub type ItemCollection = Vec<CatalogItem>;

/// Non-negative amount tagged with its currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        // NaN.max(0.0) == 0.0
        Self {
            amount: amount.max(0.0),
            currency: currency.into(),
        }
    }

    pub fn ron(amount: f64) -> Self {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    /// Amount as the service sent it: `20 RON`, `12.5 RON`
    pub fn label(&self) -> String {
        format!("{} {}", self.amount, self.currency)
    }

    /// Amount with exactly two decimals: `15.00 RON`
    pub fn label_fixed(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency)
    }
}

/// Discount percentage, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Discount(u8);

impl Discount {
    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    /// The service serializes discounts from a dataframe, so they may arrive as floats
    pub fn from_raw(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self::new(value.round() as i64)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}

/// Fields that only exist for rows of the purchase history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseFacts {
    pub amount: u32,
    pub category: String,
    pub subcategory: String,
    pub healthy_index: f64,
    pub basic_needs_index: f64,
}

/// One recommended or previously purchased product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub unit_price: Money,
    pub discount: Discount,
    pub image_url: String,
    /// Present only for purchase-history rows
    pub purchase: Option<PurchaseFacts>,
}

/// Ready-to-render price strings for a card or a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub current: String,
    /// Struck-through price, only when a discount applies
    pub original: Option<String>,
    /// `-25%` bubble, only when a discount applies
    pub badge: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, unit_price: Money, discount: Discount) -> Self {
        Self {
            name: name.into(),
            unit_price,
            discount,
            image_url: String::new(),
            purchase: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_purchase(mut self, facts: PurchaseFacts) -> Self {
        self.purchase = Some(facts);
        self
    }

    /// Unit price after discount, rounded to cents when a discount applies
    pub fn effective_price(&self) -> f64 {
        if !self.discount.is_active() {
            return self.unit_price.amount;
        }
        let factor = 1.0 - f64::from(self.discount.percent()) / 100.0;
        round_cents(self.unit_price.amount * factor)
    }

    pub fn price_display(&self) -> PriceDisplay {
        if !self.discount.is_active() {
            return PriceDisplay {
                current: self.unit_price.label(),
                original: None,
                badge: None,
            };
        }

        let discounted = Money::new(self.effective_price(), self.unit_price.currency.clone());
        PriceDisplay {
            current: discounted.label_fixed(),
            original: Some(self.unit_price.label()),
            badge: Some(format!("-{}%", self.discount.percent())),
        }
    }

    /// Discount column of the history table: `25%` or `-`
    pub fn discount_label(&self) -> String {
        if self.discount.is_active() {
            format!("{}%", self.discount.percent())
        } else {
            "-".to_string()
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount_shows_base_price_only() {
        let item = CatalogItem::new("Paine Alba", Money::ron(20.0), Discount::new(0));
        assert_eq!(item.effective_price(), 20.0);
        assert_eq!(
            item.price_display(),
            PriceDisplay {
                current: "20 RON".to_string(),
                original: None,
                badge: None,
            }
        );
        assert_eq!(item.discount_label(), "-");
    }

    #[test]
    fn test_quarter_discount_on_twenty() {
        let item = CatalogItem::new("Sos de Soia", Money::ron(20.0), Discount::new(25));
        assert_eq!(item.effective_price(), 15.0);
        let display = item.price_display();
        assert_eq!(display.current, "15.00 RON");
        assert_eq!(display.original.as_deref(), Some("20 RON"));
        assert_eq!(display.badge.as_deref(), Some("-25%"));
        assert_eq!(item.discount_label(), "25%");
    }

    #[test]
    fn test_effective_price_rounds_to_cents() {
        let item = CatalogItem::new("Vin", Money::ron(15.0), Discount::new(15));
        assert_eq!(item.effective_price(), 12.75);
        let item = CatalogItem::new("Cafea", Money::ron(9.99), Discount::new(33));
        assert_eq!(item.effective_price(), 6.69);
    }

    #[test]
    fn test_discount_is_clamped() {
        assert_eq!(Discount::new(-5).percent(), 0);
        assert_eq!(Discount::new(250).percent(), 100);
        assert_eq!(Discount::from_raw(12.6).percent(), 13);
        assert_eq!(Discount::from_raw(f64::NAN).percent(), 0);
    }

    #[test]
    fn test_negative_price_is_floored() {
        assert_eq!(Money::ron(-3.0).amount, 0.0);
        assert_eq!(Money::ron(f64::NAN).amount, 0.0);
    }
}
