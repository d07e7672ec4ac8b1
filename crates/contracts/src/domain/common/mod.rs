//! Types shared by every catalog-backed aggregate

pub mod catalog_item;

pub use catalog_item::{CatalogItem, Discount, ItemCollection, Money, PriceDisplay, PurchaseFacts};
