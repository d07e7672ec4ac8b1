use contracts::domain::a005_subscription::aggregate::{
    SubscribeErrorBody, SubscribeRequest, SubscribeResponse, MSG_SEND_ERROR, MSG_SEND_FAILED,
    MSG_SENT,
};
use contracts::shared::error::CatalogError;
use gloo_net::http::Request;

/// POST the subscription to our backend.
///
/// A non-success status becomes `SendFailure` with the provider's message when
/// the body carries one; a network failure stays a `Transport` error.
pub async fn send_subscription(
    endpoint: &str,
    request: &SubscribeRequest,
) -> Result<SubscribeResponse, CatalogError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| CatalogError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let detail = match response.json::<SubscribeErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {}", status),
        };
        return Err(CatalogError::SendFailure(detail));
    }

    // 2xx is a success even if the receipt cannot be read
    Ok(response
        .json::<SubscribeResponse>()
        .await
        .unwrap_or_else(|e| {
            log::warn!("Unreadable send receipt: {}", e);
            SubscribeResponse {
                message: MSG_SENT.to_string(),
                data: None,
            }
        }))
}

/// Status line for a finished send attempt
pub fn outcome_message(outcome: &Result<SubscribeResponse, CatalogError>) -> &'static str {
    match outcome {
        Ok(_) => MSG_SENT,
        Err(CatalogError::SendFailure(_)) => MSG_SEND_FAILED,
        Err(_) => MSG_SEND_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        let ok = Ok(SubscribeResponse {
            message: MSG_SENT.to_string(),
            data: None,
        });
        assert_eq!(outcome_message(&ok), "Email sent successfully!");
        assert_eq!(
            outcome_message(&Err(CatalogError::SendFailure("bad key".into()))),
            "Failed to send email. Please try again."
        );
        assert_eq!(
            outcome_message(&Err(CatalogError::Transport("offline".into()))),
            "An error occurred. Please try again."
        );
    }
}
