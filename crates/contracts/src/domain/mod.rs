pub mod a001_person;
pub mod a002_purchase_history;
pub mod a003_recommendation;
pub mod a004_generated_content;
pub mod a005_subscription;
pub mod common;
