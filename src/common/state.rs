// Application state shared across all modules

use std::sync::Arc;

use crate::auth::directory::UserDirectory;
use crate::services::GoogleService;
use crate::todos::store::TodoStore;

/// Application state containing stores, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: String,
    pub frontend_url: String,
    pub users: UserDirectory,
    pub todos: TodoStore,
    pub google_service: Arc<GoogleService>,
}
