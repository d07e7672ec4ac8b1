pub mod catalog_api;
pub mod catalog_view;
pub mod config;
pub mod error;
pub mod markup;
pub mod pagination;
pub mod request_generation;
pub mod routes;
pub mod serde_lenient;
pub mod view_state;
