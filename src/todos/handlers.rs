//! Todo handlers
//!
//! All routes here require a valid bearer token; the AuthedUser extractor
//! rejects the request before any store access otherwise.

use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

use super::models::{CreateTodoRequest, Todo, UpdateTodoRequest};

/// GET /api/todos
/// Returns the caller's todo items in creation order
pub async fn get_todos(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let state = state_lock.read().await.clone();
    let todos = state.todos.list_for_owner(&authed.id).await;
    debug!(user_id = %authed.id, count = todos.len(), "Listed todos");
    Ok(Json(todos))
}

/// POST /api/todos
/// Creates a new todo owned by the caller
pub async fn create_todo(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let result = payload.validate(&payload);
    if !result.is_valid {
        return Err(ApiError::from(result));
    }

    let state = state_lock.read().await.clone();

    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        text: payload.text,
        completed: false,
        created_at: Utc::now(),
        user_id: authed.id.clone(),
    };

    state.todos.insert(todo.clone()).await;
    info!(user_id = %authed.id, todo_id = %todo.id, "Created todo");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/:id
/// Partially updates a todo owned by the caller; 404 for anything the
/// caller does not own
pub async fn update_todo(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let result = payload.validate(&payload);
    if !result.is_valid {
        return Err(ApiError::from(result));
    }

    let state = state_lock.read().await.clone();

    match state.todos.update_for_owner(&id, &authed.id, &payload).await {
        Some(todo) => {
            debug!(user_id = %authed.id, todo_id = %todo.id, "Updated todo");
            Ok(Json(todo))
        }
        None => Err(ApiError::NotFound("Todo not found".to_string())),
    }
}

/// DELETE /api/todos/:id
/// Deletes a todo owned by the caller; 404 for anything the caller does
/// not own
pub async fn delete_todo(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let state = state_lock.read().await.clone();

    if state.todos.delete_for_owner(&id, &authed.id).await {
        info!(user_id = %authed.id, todo_id = %id, "Deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Todo not found".to_string()))
    }
}
