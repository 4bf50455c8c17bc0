//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::common::{ApiError, AppState};

use super::tokens;

/// Authenticated user extractor
///
/// Verifies the bearer token on the request and exposes the resolved local
/// user id to the handler. Requests with no credential are rejected with
/// 401; requests with a malformed, forged, or expired token with 403. Which
/// verification sub-case failed is logged but never leaked to the client.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
}

/// Turn a raw `Authorization` header value into a resolved local user id
pub fn authorize(header: Option<&str>, jwt_secret: &str) -> Result<String, ApiError> {
    let raw = match header {
        Some(h) => h,
        None => {
            warn!("Authentication failed: missing Authorization header");
            return Err(ApiError::Unauthorized("missing auth".to_string()));
        }
    };

    // Only the bearer scheme is accepted
    let token = match raw.strip_prefix("Bearer ") {
        Some(t) => t,
        None => {
            warn!("Authentication failed: credential is not a bearer token");
            return Err(ApiError::Forbidden("invalid token".to_string()));
        }
    };

    match tokens::verify(token, jwt_secret) {
        Ok(claims) => Ok(claims.user_id),
        Err(e) => {
            warn!(error = %e, "Session token validation failed");
            Err(ApiError::Forbidden("invalid token".to_string()))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Extension containing the AppState
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let id = authorize(header, &app_state.jwt_secret)?;
        Ok(AuthedUser { id })
    }
}
