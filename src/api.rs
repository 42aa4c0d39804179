//! Calls to the site's form endpoints.

use crate::config;
use crate::forms::{ContactRequest, EventSubscriptionRequest, FormError, UnsubscribeRequest};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTACT_PATH: &str = "/api/contact";
pub const UNSUBSCRIBE_PATH: &str = "/api/unsubscribe";
pub const EVENT_SUBSCRIPTION_PATH: &str = "/api/event-subscription";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("Network error: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Text safe to show next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::Request(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", config::get_backend_url(), path)
}

fn status_error(status: u16, body: ApiResponse) -> ApiError {
    let message = body
        .error
        .or(body.message)
        .unwrap_or_else(|| format!("Request failed ({})", status));
    ApiError::Status { status, message }
}

async fn read(response: Response) -> Result<ApiResponse, ApiError> {
    let status = response.status();
    // Endpoints may answer with an empty body.
    let body = response.json::<ApiResponse>().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    Ok(ApiResponse {
        success: true,
        ..body
    })
}

async fn post<T: Serialize>(path: &str, body: &T) -> Result<ApiResponse, ApiError> {
    let url = endpoint(path);
    let response = Request::post(&url).json(body)?.send().await?;
    let result = read(response).await;
    if let Err(err) = &result {
        log::error!("POST {} failed: {}", path, err);
    }
    result
}

pub async fn submit_contact(request: &ContactRequest) -> Result<ApiResponse, ApiError> {
    log::info!("Submitting contact form (service: {:?})", request.service);
    post(CONTACT_PATH, request).await
}

pub async fn subscribe_to_events(request: &EventSubscriptionRequest) -> Result<ApiResponse, ApiError> {
    post(EVENT_SUBSCRIPTION_PATH, request).await
}

pub async fn unsubscribe(request: &UnsubscribeRequest) -> Result<ApiResponse, ApiError> {
    post(UNSUBSCRIBE_PATH, request).await
}
