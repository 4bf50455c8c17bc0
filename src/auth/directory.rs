//! In-memory user directory
//!
//! Authoritative mapping from Google subject id to local user record. State
//! lives only in process memory and is injected into handlers through the
//! shared app state, never read from a global.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::common::{generate_user_id, safe_email_log};
use crate::services::google::GoogleProfile;

use super::models::User;

#[derive(Default)]
struct DirectoryInner {
    by_id: HashMap<String, User>,
    id_by_subject: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct UserDirectory {
    inner: Arc<RwLock<DirectoryInner>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the user for a Google subject id, creating the record on
    /// first login.
    ///
    /// The write lock is held across lookup and insert, so two
    /// near-simultaneous callbacks for the same subject (e.g. two browser
    /// tabs finishing OAuth together) resolve to exactly one record; the
    /// loser of the race observes the winner's user.
    pub async fn find_or_create(&self, profile: &GoogleProfile) -> User {
        let mut inner = self.inner.write().await;

        if let Some(id) = inner.id_by_subject.get(&profile.sub) {
            if let Some(user) = inner.by_id.get(id).cloned() {
                debug!(
                    user_id = %user.id,
                    provider = "google",
                    provider_id = %profile.sub,
                    "Found existing user in directory"
                );
                return user;
            }
        }

        let user = User {
            id: generate_user_id(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            picture: profile.picture.clone(),
            provider: "google".to_string(),
            provider_id: profile.sub.clone(),
            created_at: Utc::now().to_rfc3339(),
        };

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            provider = "google",
            "Creating new user account via Google OAuth"
        );

        inner
            .id_by_subject
            .insert(profile.sub.clone(), user.id.clone());
        inner.by_id.insert(user.id.clone(), user.clone());

        user
    }

    pub async fn get_by_id(&self, id: &str) -> Option<User> {
        self.inner.read().await.by_id.get(id).cloned()
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}
