//! Authentication data models

use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    /// Local user identifier; "userId" on the wire, which is what the
    /// browser client expects in the token payload
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: usize,
}

/// Local user record, created lazily on first successful Google login.
/// Never mutated or deleted afterwards.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub created_at: String,
}

/// Error codes carried back to the client on a failed OAuth callback.
/// These are the only two codes the login page knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackError {
    /// Provider error or missing/incomplete profile assertion
    NoUser,
    /// Network failure, misconfiguration, or token signing failure
    TokenError,
}

impl CallbackError {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackError::NoUser => "no_user",
            CallbackError::TokenError => "token_error",
        }
    }
}
