pub mod app_state;
pub mod config;
pub mod email;
pub mod logger;
