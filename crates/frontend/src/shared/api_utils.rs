//! Base URL of the record services
//!
//! The backend listens on port 3000 of the host the page was served from.

use contracts::domain::common::{EntityType, RecordId};
use contracts::shared::error::{ApiErrorBody, ServiceError};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// API base URL like "http://localhost:3000", empty without a window
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Collection path of a record type, e.g. "/api/posts"
pub fn collection_path(entity_type: EntityType) -> String {
    format!("/api/{}s", entity_type.code())
}

/// Item path, e.g. "/api/users/3"
pub fn item_path(entity_type: EntityType, id: RecordId) -> String {
    format!("{}/{}", collection_path(entity_type), id)
}

/// Transport failure: nothing useful to show, the caller's fallback applies
pub fn transport_error(err: gloo_net::Error) -> ServiceError {
    log::warn!("request failed: {}", err);
    ServiceError::without_reason()
}

/// Non-2xx response: the `{message}` body becomes the reason when present
async fn response_error(response: Response) -> ServiceError {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.into(),
        Err(_) => {
            log::warn!("HTTP {} without error body", status);
            ServiceError::without_reason()
        }
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::warn!("failed to parse response: {}", e);
        ServiceError::without_reason()
    })
}

pub async fn expect_ok(response: Response) -> Result<(), ServiceError> {
    if response.ok() {
        Ok(())
    } else {
        Err(response_error(response).await)
    }
}
