pub mod a005_subscription;
