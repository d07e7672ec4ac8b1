use super::types::{EmailError, EmailSender, OutgoingEmail};
use crate::shared::config::EmailConfig;
use async_trait::async_trait;
use contracts::domain::a005_subscription::aggregate::SentEmail;
use serde::{Deserialize, Serialize};

/// Resend HTTP API provider
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Error body of the Resend API: `{"statusCode": 422, "name": "...", "message": "..."}`
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: String,
}

impl ResendEmailSender {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| EmailError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: OutgoingEmail) -> Result<SentEmail, EmailError> {
        if self.api_key.trim().is_empty() {
            return Err(EmailError::Configuration("email API key is not set".into()));
        }

        let payload = ResendPayload {
            from: &self.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
        };

        tracing::debug!("POST {} to={}", self.api_url, message.to);
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Resend returned {}: {}", status, body);
            let message = serde_json::from_str::<ResendErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(EmailError::Provider(message));
        }

        response
            .json::<SentEmail>()
            .await
            .map_err(|e| EmailError::Network(format!("unreadable receipt: {}", e)))
    }

    fn provider_name(&self) -> &str {
        "resend"
    }
}
