//! Authentication handlers

use axum::extract::{Extension, Json, Query};
use axum::response::Redirect;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::common::{helpers::safe_token_log, safe_email_log, ApiError, AppState};
use crate::services::google::GoogleError;

use super::extractors::AuthedUser;
use super::models::CallbackError;
use super::tokens;

/// GET /auth/google - Start Google OAuth flow
/// Redirects the browser to Google's consent screen
pub async fn google_oauth_start(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await;

    let auth_url = state.google_service.authorization_url().map_err(|e| {
        error!(error = %e, "Failed to generate Google OAuth URL");
        ApiError::InternalServer("Failed to generate OAuth URL".to_string())
    })?;

    info!("Starting Google OAuth flow");
    Ok(Redirect::to(&auth_url))
}

/// GET /auth/google/callback - Handle OAuth callback from Google
///
/// Exchanges the authorization code for a profile assertion, resolves the
/// local user, and delivers a freshly issued session token to the client via
/// redirect. Every failure path is converted to a redirect carrying one of
/// the two error codes the login page understands; nothing here surfaces a
/// raw error to the browser.
pub async fn google_oauth_callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Redirect {
    let state = state_lock.read().await.clone();

    if let Some(error) = params.get("error") {
        warn!(oauth_error = %error, "Google OAuth returned error");
        return login_error_redirect(&state.frontend_url, CallbackError::NoUser);
    }

    let code = match params.get("code") {
        Some(c) => c,
        None => {
            warn!("No authorization code in OAuth callback");
            return login_error_redirect(&state.frontend_url, CallbackError::NoUser);
        }
    };

    let profile = match state.google_service.profile_for_code(code).await {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "OAuth code exchange failed");
            return login_error_redirect(&state.frontend_url, callback_error_for(&e));
        }
    };

    let user = state.users.find_or_create(&profile).await;

    let token = match tokens::issue(&user.id, &state.jwt_secret) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, user_id = %user.id, "JWT encoding error during authentication");
            return login_error_redirect(&state.frontend_url, CallbackError::TokenError);
        }
    };

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        token = %safe_token_log(&token),
        provider = "google",
        "User authentication successful via Google OAuth"
    );

    Redirect::to(&format!("{}/login?token={}", state.frontend_url, token))
}

/// GET /auth/me
/// Returns the current authenticated user's profile
///
/// # Response
/// ```json
/// {
///   "id": "U_K7NP3X",
///   "email": "a@x.com",
///   "name": "Alice",
///   "picture": null
/// }
/// ```
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = state
        .users
        .get_by_id(&authed.id)
        .await
        .ok_or_else(|| {
            warn!(user_id = %authed.id, "Token resolved to a user id not in the directory");
            ApiError::NotFound("user not found".to_string())
        })?;

    let resp = serde_json::json!({
        "id": user.id,
        "email": user.email,
        "name": user.name,
        "picture": user.picture,
    });
    Ok(Json(resp))
}

/// POST /auth/logout
/// Logout endpoint - since we're using JWT tokens, logout is handled
/// client-side by discarding the token. This endpoint just confirms the
/// logout request; no server state changes.
pub async fn logout_handler(_authed: AuthedUser) -> Result<Json<serde_json::Value>, ApiError> {
    info!("User logout successful");
    let resp = serde_json::json!({
        "message": "Logout successful"
    });
    Ok(Json(resp))
}

fn login_error_redirect(frontend_url: &str, code: CallbackError) -> Redirect {
    Redirect::to(&format!("{}/login?error={}", frontend_url, code.as_str()))
}

/// Which redirect error code a provider failure maps to: a rejection or an
/// unusable profile assertion means "no_user"; network failures, timeouts,
/// and misconfiguration mean "token_error"
pub(crate) fn callback_error_for(error: &GoogleError) -> CallbackError {
    match error {
        GoogleError::OAuthFailed(_) | GoogleError::IncompleteProfile => CallbackError::NoUser,
        _ => CallbackError::TokenError,
    }
}
