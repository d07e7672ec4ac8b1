use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a005_subscription::aggregate::{
    SubscribeErrorBody, SubscribeRequest, SubscribeResponse, MSG_SENT,
};

use crate::domain::a005_subscription::service::{self, SendError};
use crate::shared::app_state::AppState;
use crate::shared::email::EmailError;

/// Failure of `POST /api/send`, rendered as `{"error": ...}`
#[derive(Debug)]
pub enum SendApiError {
    Send(SendError),
    BadBody(String),
}

impl From<SendError> for SendApiError {
    fn from(e: SendError) -> Self {
        SendApiError::Send(e)
    }
}

impl SendApiError {
    fn status(&self) -> StatusCode {
        match self {
            SendApiError::Send(SendError::Invalid(_)) => StatusCode::BAD_REQUEST,
            SendApiError::Send(SendError::Delivery(EmailError::Provider(_))) => {
                StatusCode::BAD_REQUEST
            }
            SendApiError::Send(SendError::Delivery(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            SendApiError::BadBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            SendApiError::Send(e) => e.to_string(),
            SendApiError::BadBody(e) => e.clone(),
        }
    }
}

impl IntoResponse for SendApiError {
    fn into_response(self) -> Response {
        let body = Json(SubscribeErrorBody {
            error: self.message(),
        });
        (self.status(), body).into_response()
    }
}

/// POST /api/send
pub async fn send(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SubscribeResponse>, SendApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Unreadable /api/send body: {}", e);
        SendApiError::BadBody(e.body_text())
    })?;

    match service::send_catalog_link(state.sender.as_ref(), &state.config.email, request).await {
        Ok(receipt) => Ok(Json(SubscribeResponse {
            message: MSG_SENT.to_string(),
            data: Some(receipt),
        })),
        Err(e) => {
            tracing::error!("Catalog email not sent: {}", e);
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_subscription::service::tests::{email_config, RecordingSender};
    use crate::shared::config::{Config, ServerConfig};
    use axum::body::to_bytes;
    use std::sync::Arc;

    fn state(sender: RecordingSender) -> AppState {
        AppState {
            config: Arc::new(Config {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 3000,
                    static_dir: "dist".to_string(),
                },
                email: email_config(),
            }),
            sender: Arc::new(sender),
        }
    }

    fn body(email: &str, link: &str) -> Result<Json<SubscribeRequest>, JsonRejection> {
        Ok(Json(SubscribeRequest {
            recipient: email.to_string(),
            catalog_link: link.to_string(),
        }))
    }

    async fn error_of(err: SendApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: SubscribeErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body.error)
    }

    #[tokio::test]
    async fn test_success_returns_message_and_receipt() {
        let Json(resp) = send(
            State(state(RecordingSender::default())),
            body("a@b.com", "http://localhost:3000/products?id=5"),
        )
        .await
        .unwrap();

        assert_eq!(resp.message, "Email sent successfully!");
        assert_eq!(resp.data.unwrap().id, "msg-1");
    }

    #[tokio::test]
    async fn test_missing_fields_are_400() {
        let err = send(State(state(RecordingSender::default())), body("", "http://x"))
            .await
            .unwrap_err();
        assert_eq!(
            error_of(err).await,
            (StatusCode::BAD_REQUEST, "Email is required".to_string())
        );

        let err = send(State(state(RecordingSender::default())), body("a@b.com", ""))
            .await
            .unwrap_err();
        assert_eq!(
            error_of(err).await,
            (StatusCode::BAD_REQUEST, "Product link is required".to_string())
        );
    }

    #[tokio::test]
    async fn test_provider_rejection_is_400_with_its_message() {
        let sender = RecordingSender {
            reject: Some("Invalid `to` field".to_string()),
            ..Default::default()
        };
        let err = send(State(state(sender)), body("nope", "http://x"))
            .await
            .unwrap_err();
        assert_eq!(
            error_of(err).await,
            (StatusCode::BAD_REQUEST, "Invalid `to` field".to_string())
        );
    }

    #[tokio::test]
    async fn test_network_and_configuration_are_500() {
        let network = SendApiError::Send(SendError::Delivery(EmailError::Network(
            "timed out".to_string(),
        )));
        assert_eq!(network.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let config = SendApiError::Send(SendError::Delivery(EmailError::Configuration(
            "no key".to_string(),
        )));
        let (status, message) = error_of(config).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("no key"));
    }
}
