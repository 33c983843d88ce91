// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    ApiMessage, AuthResponse, LoginRequest, PaymentDraft, PaymentRecord, RegisterRequest,
};
use crate::utils::constants::API_URL;

const GENERIC_ERROR: &str = "An error occurred";

/// The single failure signal of the adapter. Network errors, auth failures
/// and validation rejections all collapse into one user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API client - stateless, one attempt per call, no retries.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, RequestError> {
        let response = Request::post(&self.url("/users/login"))
            .json(credentials)
            .map_err(|e| RequestError::new(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    pub async fn register(&self, profile: &RegisterRequest) -> Result<AuthResponse, RequestError> {
        let response = Request::post(&self.url("/users/register"))
            .json(profile)
            .map_err(|e| RequestError::new(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    pub async fn list_payments(&self, token: &str) -> Result<Vec<PaymentRecord>, RequestError> {
        let response = Request::get(&self.url("/payments"))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    pub async fn create_payment(
        &self,
        token: &str,
        draft: &PaymentDraft,
    ) -> Result<PaymentRecord, RequestError> {
        let response = Request::post(&self.url("/payments"))
            .header("Authorization", &Self::bearer(token))
            .json(draft)
            .map_err(|e| RequestError::new(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    pub async fn update_payment(
        &self,
        token: &str,
        id: &str,
        draft: &PaymentDraft,
    ) -> Result<PaymentRecord, RequestError> {
        let response = Request::put(&self.url(&format!("/payments/{}", id)))
            .header("Authorization", &Self::bearer(token))
            .json(draft)
            .map_err(|e| RequestError::new(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    pub async fn delete_payment(&self, token: &str, id: &str) -> Result<ApiMessage, RequestError> {
        let response = Request::delete(&self.url(&format!("/payments/{}", id)))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| RequestError::new(format!("Network error: {}", e)))?;

        Self::into_json(response).await
    }

    /// Success: parsed JSON body. Non-success status: RequestError carrying
    /// the server's message field, or a generic fallback.
    async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| RequestError::new(format!("Parse error: {}", e)))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RequestError::new(failure_message(&body)))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the server-provided message out of an error body, falling back to a
/// generic message when the body is empty or not the expected shape.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|payload| payload.message)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_the_server_payload() {
        assert_eq!(
            failure_message(r#"{"message":"Payment not found"}"#),
            "Payment not found"
        );
    }

    #[test]
    fn failure_message_falls_back_on_missing_or_malformed_bodies() {
        assert_eq!(failure_message(""), GENERIC_ERROR);
        assert_eq!(failure_message("<html>502</html>"), GENERIC_ERROR);
        assert_eq!(failure_message(r#"{"error":"nope"}"#), GENERIC_ERROR);
    }

    #[test]
    fn urls_are_joined_against_the_base() {
        let client = ApiClient::with_base_url("http://localhost:5000/api");
        assert_eq!(
            client.url("/payments/abc123"),
            "http://localhost:5000/api/payments/abc123"
        );
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(ApiClient::bearer("jwt"), "Bearer jwt");
    }

    #[test]
    fn request_error_displays_its_message() {
        let err = RequestError::new("Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
