//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /auth/google` - Redirect to Google's consent screen
/// - `GET /auth/google/callback` - OAuth callback, redirects to the client
/// - `GET /auth/me` - Get current user information
/// - `POST /auth/logout` - Logout (client-side token removal)
pub fn auth_routes() -> Router {
    Router::new()
        .route("/auth/google", get(handlers::google_oauth_start))
        .route("/auth/google/callback", get(handlers::google_oauth_callback))
        .route("/auth/me", get(handlers::me_handler))
        .route("/auth/logout", post(handlers::logout_handler))
}
