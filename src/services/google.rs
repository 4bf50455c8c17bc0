// src/services/google.rs
//! Google OAuth2 integration
//!
//! Handles the provider side of the authorization-code flow: building the
//! consent-screen URL, exchanging the callback code for tokens, and fetching
//! the profile assertion from the OpenID Connect userinfo endpoint. Identity
//! resolution itself lives in the auth module; this service only turns an
//! authorization code into a `GoogleProfile`.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("Google OAuth not configured")]
    NotConfigured,

    #[error("OAuth flow failed: {0}")]
    OAuthFailed(String),

    #[error("profile assertion missing required fields")]
    IncompleteProfile,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Verified profile assertion returned by Google for an authenticated user
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    /// Google's stable subject identifier, the join key for repeat logins
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
    pub scope: Option<String>,
}

#[derive(Deserialize)]
struct UserInfo {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

pub struct GoogleService {
    client: Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: String,
}

impl GoogleService {
    pub fn new(
        client: Client,
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: String,
    ) -> Self {
        Self {
            client,
            client_id,
            client_secret,
            redirect_uri,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), GoogleError> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(GoogleError::NotConfigured),
        }
    }

    /// Build the consent-screen URL the browser is redirected to
    pub fn authorization_url(&self) -> Result<String, GoogleError> {
        let (client_id, _) = self.credentials()?;

        // openid + email + profile is all this service needs from Google
        let scope_param = ["openid", "email", "profile"].join(" ");

        let auth_url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
            AUTHORIZATION_ENDPOINT,
            urlencoding::encode(client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(&scope_param)
        );

        debug!(scopes = %scope_param, "Generated Google OAuth authorization URL");
        Ok(auth_url)
    }

    /// Exchange an authorization code for tokens
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, GoogleError> {
        let (client_id, client_secret) = self.credentials()?;

        let params = [
            ("code", code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", &self.redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        debug!("Exchanging authorization code for tokens");

        let response = self
            .client
            .post(TOKEN_ENDPOINT)
            .form(&params)
            .send()
            .await
            .map_err(|e| GoogleError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Token exchange failed");
            return Err(GoogleError::OAuthFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let token_response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| GoogleError::SerializationError(e.to_string()))?;

        info!("Successfully exchanged authorization code for tokens");
        Ok(token_response)
    }

    /// Fetch the profile assertion for an access token
    pub async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, GoogleError> {
        let response = self
            .client
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| GoogleError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GoogleError::OAuthFailed(
                "Failed to get user info".to_string(),
            ));
        }

        let user_info = response
            .json::<UserInfo>()
            .await
            .map_err(|e| GoogleError::SerializationError(e.to_string()))?;

        // sub and email are required to resolve a local identity
        let email = user_info
            .email
            .filter(|e| !e.is_empty())
            .ok_or(GoogleError::IncompleteProfile)?;

        Ok(GoogleProfile {
            sub: user_info.sub,
            email,
            name: user_info.name,
            picture: user_info.picture,
        })
    }

    /// Full code-to-profile exchange used by the OAuth callback handler
    pub async fn profile_for_code(&self, code: &str) -> Result<GoogleProfile, GoogleError> {
        let tokens = self.exchange_code(code).await?;
        self.fetch_profile(&tokens.access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_service() -> GoogleService {
        GoogleService::new(
            Client::new(),
            Some("client-123.apps.googleusercontent.com".to_string()),
            Some("secret".to_string()),
            "http://localhost:8080/auth/google/callback".to_string(),
        )
    }

    #[test]
    fn test_authorization_url_contains_required_params() {
        let url = configured_service()
            .authorization_url()
            .expect("url should build for configured service");

        assert!(url.starts_with(AUTHORIZATION_ENDPOINT));
        assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fgoogle%2Fcallback"
        ));
    }

    #[test]
    fn test_authorization_url_requires_credentials() {
        let service = GoogleService::new(
            Client::new(),
            None,
            None,
            "http://localhost:8080/auth/google/callback".to_string(),
        );

        assert!(matches!(
            service.authorization_url(),
            Err(GoogleError::NotConfigured)
        ));
    }
}
