//! In-memory todo store
//!
//! Keyed collection of todo items guarded by an RwLock and shared through
//! the app state. Every accessor takes the caller's resolved user id; items
//! belonging to other users behave as if they do not exist.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::models::{Todo, UpdateTodoRequest};

#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<HashMap<String, Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, todo: Todo) {
        self.inner.write().await.insert(todo.id.clone(), todo);
    }

    /// All items owned by `user_id`, in creation order
    pub async fn list_for_owner(&self, user_id: &str) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self
            .inner
            .read()
            .await
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        todos.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        todos
    }

    /// Apply a partial update to an item owned by `user_id`. Returns the
    /// updated item, or None if no such item is visible to the caller.
    pub async fn update_for_owner(
        &self,
        id: &str,
        user_id: &str,
        changes: &UpdateTodoRequest,
    ) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let todo = inner.get_mut(id).filter(|t| t.user_id == user_id)?;

        if let Some(text) = &changes.text {
            todo.text = text.clone();
        }
        if let Some(completed) = changes.completed {
            todo.completed = completed;
        }

        Some(todo.clone())
    }

    /// Remove an item owned by `user_id`. Returns false if no such item is
    /// visible to the caller.
    pub async fn delete_for_owner(&self, id: &str, user_id: &str) -> bool {
        let mut inner = self.inner.write().await;
        match inner.get(id) {
            Some(todo) if todo.user_id == user_id => {
                inner.remove(id);
                true
            }
            _ => false,
        }
    }
}
