use crate::shared::config::Config;
use crate::shared::email::EmailSender;
use std::sync::Arc;

/// Shared handler state: the configuration and the email provider built from it
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sender: Arc<dyn EmailSender>,
}
