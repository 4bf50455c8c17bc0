//! Todo routes

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;

/// Creates the todos router
///
/// # Routes
/// - `GET /api/todos` - List the caller's todos
/// - `POST /api/todos` - Create a todo
/// - `PUT /api/todos/:id` - Update a todo
/// - `DELETE /api/todos/:id` - Delete a todo
pub fn todos_routes() -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::get_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
}
