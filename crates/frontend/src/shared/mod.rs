pub mod components;
pub mod icons;
pub mod page_context;
pub mod page_frame;
pub mod page_standard;
pub mod remote_catalog_client;
