//! # Todos Module
//!
//! Owner-scoped todo items. Every handler runs behind the AuthedUser
//! extractor and every store operation filters by the resolved user id, so
//! one user's items are invisible to another regardless of id guessing.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::Todo;
pub use routes::todos_routes;
pub use store::TodoStore;
