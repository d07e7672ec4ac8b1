use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::routes::AppRoute;

pub const MSG_SENT: &str = "Email sent successfully!";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again.";
pub const MSG_SEND_ERROR: &str = "An error occurred. Please try again.";
pub const MSG_MISSING_PERSON: &str = "Person ID is missing in the URL.";
pub const MSG_EMPTY_EMAIL: &str = "Please enter your email address.";

pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_LINK_REQUIRED: &str = "Product link is required";

/// Body of `POST /api/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(rename = "email", alias = "recipient", default)]
    pub recipient: String,

    #[serde(rename = "productLink", alias = "catalogLink", default)]
    pub catalog_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("{}", ERR_EMAIL_REQUIRED)]
    EmptyEmail,

    #[error("{}", MSG_MISSING_PERSON)]
    MissingPersonId,

    #[error("{}", ERR_LINK_REQUIRED)]
    EmptyLink,
}

impl SubscribeRequest {
    /// Trimmed copy, or the first missing field
    pub fn validate(&self) -> Result<Self, SubscriptionError> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(SubscriptionError::EmptyEmail);
        }
        let catalog_link = self.catalog_link.trim();
        if catalog_link.is_empty() {
            return Err(SubscriptionError::EmptyLink);
        }
        Ok(Self {
            recipient: recipient.to_string(),
            catalog_link: catalog_link.to_string(),
        })
    }
}

/// Provider receipt returned on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SentEmail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeErrorBody {
    pub error: String,
}

/// Absolute link to the person's magazine. The identifier is taken as found in
/// the URL and is not range-checked here.
pub fn catalog_link(catalog_base: &str, raw_id: &str) -> String {
    format!(
        "{}{}",
        catalog_base.trim_end_matches('/'),
        AppRoute::Magazine.href_raw(raw_id)
    )
}

/// Client-side checks before anything is sent.
///
/// The email is checked first, then the identifier from the current URL; the
/// built request then goes through the same `validate` the server runs.
pub fn prepare_subscription(
    email: &str,
    raw_id: Option<&str>,
    catalog_base: &str,
) -> Result<SubscribeRequest, SubscriptionError> {
    let recipient = email.trim();
    if recipient.is_empty() {
        return Err(SubscriptionError::EmptyEmail);
    }
    let raw_id = raw_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(SubscriptionError::MissingPersonId)?;

    SubscribeRequest {
        recipient: recipient.to_string(),
        catalog_link: catalog_link(catalog_base, raw_id),
    }
    .validate()
}

/// Status line shown under the form when a submission is rejected before sending
pub fn rejection_message(error: &SubscriptionError) -> &'static str {
    match error {
        SubscriptionError::EmptyEmail => MSG_EMPTY_EMAIL,
        SubscriptionError::MissingPersonId => MSG_MISSING_PERSON,
        SubscriptionError::EmptyLink => ERR_LINK_REQUIRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn test_empty_email_rejected_before_anything_else() {
        assert_eq!(
            prepare_subscription("   ", None, BASE),
            Err(SubscriptionError::EmptyEmail)
        );
        assert_eq!(
            prepare_subscription("", Some("5"), BASE),
            Err(SubscriptionError::EmptyEmail)
        );
    }

    #[test]
    fn test_missing_identifier_fails_closed() {
        assert_eq!(
            prepare_subscription("ana@example.com", None, BASE),
            Err(SubscriptionError::MissingPersonId)
        );
        assert_eq!(
            prepare_subscription("ana@example.com", Some(""), BASE),
            Err(SubscriptionError::MissingPersonId)
        );
    }

    #[test]
    fn test_link_is_derived_from_url_identifier() {
        let req = prepare_subscription(" ana@example.com ", Some("77"), "http://localhost:3000/")
            .unwrap();
        assert_eq!(req.recipient, "ana@example.com");
        // not range-checked at this layer
        assert_eq!(req.catalog_link, "http://localhost:3000/products?id=77");
    }

    #[test]
    fn test_wire_names() {
        let req = SubscribeRequest {
            recipient: "a@b.ro".to_string(),
            catalog_link: "http://x/products?id=1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "a@b.ro");
        assert_eq!(json["productLink"], "http://x/products?id=1");

        let parsed: SubscribeRequest =
            serde_json::from_str(r#"{"recipient": "c@d.ro", "catalogLink": "l"}"#).unwrap();
        assert_eq!(parsed.recipient, "c@d.ro");
        assert_eq!(parsed.catalog_link, "l");
    }

    #[test]
    fn test_request_validation() {
        let missing_link = SubscribeRequest {
            recipient: "a@b.ro".to_string(),
            catalog_link: " ".to_string(),
        };
        assert_eq!(missing_link.validate(), Err(SubscriptionError::EmptyLink));
        assert_eq!(SubscriptionError::EmptyEmail.to_string(), "Email is required");
        assert_eq!(SubscriptionError::EmptyLink.to_string(), "Product link is required");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            rejection_message(&SubscriptionError::EmptyEmail),
            "Please enter your email address."
        );
        assert_eq!(
            rejection_message(&SubscriptionError::MissingPersonId),
            "Person ID is missing in the URL."
        );
        assert_eq!(
            rejection_message(&SubscriptionError::EmptyLink),
            "Product link is required"
        );
    }
}
