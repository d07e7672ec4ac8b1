use super::email_template::render_catalog_email;
use crate::shared::config::EmailConfig;
use crate::shared::email::{EmailError, EmailSender, OutgoingEmail};
use contracts::domain::a005_subscription::aggregate::{
    SentEmail, SubscribeRequest, SubscriptionError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Invalid(#[from] SubscriptionError),

    #[error(transparent)]
    Delivery(#[from] EmailError),
}

/// Validates the request and mails the catalog link to the recipient
pub async fn send_catalog_link(
    sender: &dyn EmailSender,
    config: &EmailConfig,
    request: SubscribeRequest,
) -> Result<SentEmail, SendError> {
    let request = request.validate()?;

    let message = OutgoingEmail {
        to: request.recipient,
        subject: config.subject.clone(),
        html: render_catalog_email(&request.catalog_link),
    };

    tracing::info!(
        "Sending catalog email to {} via {}",
        message.to,
        sender.provider_name()
    );
    let receipt = sender.send(message).await?;
    tracing::info!("Catalog email accepted, id={}", receipt.id);
    Ok(receipt)
}
