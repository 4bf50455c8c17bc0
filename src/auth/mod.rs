//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Google OAuth login and callback
//! - Session token issuing and verification
//! - The in-memory user directory
//! - AuthedUser extractor for protected routes

pub mod directory;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod tokens;


pub use directory::UserDirectory;
pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
