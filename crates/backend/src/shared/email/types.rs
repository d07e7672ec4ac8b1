use async_trait::async_trait;
use contracts::domain::a005_subscription::aggregate::SentEmail;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors of the email provider
#[derive(Debug, Error)]
pub enum EmailError {
    /// The provider answered and refused the message
    #[error("{0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// One message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Trait for transactional email providers
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: OutgoingEmail) -> Result<SentEmail, EmailError>;

    fn provider_name(&self) -> &str;
}
