//! Tests for todos module
//!
//! These tests verify owner scoping of the todo store and validation of
//! request payloads. The central property: a token holder can never see or
//! touch another user's items, id guessing included.

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::super::models::{CreateTodoRequest, UpdateTodoRequest};
    use crate::common::Validator;
    use chrono::Utc;
    use uuid::Uuid;

    fn todo(text: &str, user_id: &str) -> models::Todo {
        models::Todo {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
            user_id: user_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let store = TodoStore::new();
        store.insert(todo("buy milk", "U_ALICE1")).await;
        store.insert(todo("walk dog", "U_ALICE1")).await;
        store.insert(todo("file taxes", "U_BOB001")).await;

        let alice = store.list_for_owner("U_ALICE1").await;
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|t| t.user_id == "U_ALICE1"));

        let bob = store.list_for_owner("U_BOB001").await;
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].text, "file taxes");

        assert!(store.list_for_owner("U_NOBODY").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let store = TodoStore::new();
        let mut first = todo("first", "U_ALICE1");
        let mut second = todo("second", "U_ALICE1");
        first.created_at = Utc::now() - chrono::Duration::seconds(10);
        second.created_at = Utc::now();
        // Insert out of order on purpose
        store.insert(second).await;
        store.insert(first).await;

        let todos = store.list_for_owner("U_ALICE1").await;
        assert_eq!(todos[0].text, "first");
        assert_eq!(todos[1].text, "second");
    }

    #[tokio::test]
    async fn test_known_id_gives_no_access_across_owners() {
        let store = TodoStore::new();
        let item = todo("secret plan", "U_ALICE1");
        let id = item.id.clone();
        store.insert(item).await;

        // Bob knows the id but can neither read, change, nor delete the item
        assert!(store.list_for_owner("U_BOB001").await.is_empty());
        let changes = UpdateTodoRequest {
            text: Some("hijacked".to_string()),
            completed: None,
        };
        assert!(store.update_for_owner(&id, "U_BOB001", &changes).await.is_none());
        assert!(!store.delete_for_owner(&id, "U_BOB001").await);

        // Alice's item is untouched
        let alice = store.list_for_owner("U_ALICE1").await;
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].text, "secret plan");
        assert!(!alice[0].completed);
    }

    #[tokio::test]
    async fn test_update_scoped_to_owner() {
        let store = TodoStore::new();
        let item = todo("draft email", "U_ALICE1");
        let id = item.id.clone();
        store.insert(item).await;

        let changes = UpdateTodoRequest {
            text: None,
            completed: Some(true),
        };

        assert!(store.update_for_owner(&id, "U_BOB001", &changes).await.is_none());

        let updated = store
            .update_for_owner(&id, "U_ALICE1", &changes)
            .await
            .expect("owner update should succeed");
        assert!(updated.completed);
        assert_eq!(updated.text, "draft email");

        // Partial text update keeps the completion flag
        let changes = UpdateTodoRequest {
            text: Some("send email".to_string()),
            completed: None,
        };
        let updated = store
            .update_for_owner(&id, "U_ALICE1", &changes)
            .await
            .expect("owner update should succeed");
        assert_eq!(updated.text, "send email");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_delete_scoped_to_owner() {
        let store = TodoStore::new();
        let item = todo("buy milk", "U_ALICE1");
        let id = item.id.clone();
        store.insert(item).await;

        assert!(!store.delete_for_owner(&id, "U_BOB001").await);
        // Still there for the owner after the failed cross-user delete
        assert_eq!(store.list_for_owner("U_ALICE1").await.len(), 1);

        assert!(store.delete_for_owner(&id, "U_ALICE1").await);
        assert!(store.list_for_owner("U_ALICE1").await.is_empty());
        // Second delete reports not found
        assert!(!store.delete_for_owner(&id, "U_ALICE1").await);
    }

    #[test]
    fn test_todo_wire_field_names() {
        let item = todo("buy milk", "U_ALICE1");
        let json = serde_json::to_value(&item).expect("todo should serialize");

        assert!(json.get("createdAt").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_create_validation() {
        let valid = CreateTodoRequest {
            text: "buy milk".to_string(),
        };
        assert!(valid.validate(&valid).is_valid);

        let empty = CreateTodoRequest {
            text: "   ".to_string(),
        };
        assert!(!empty.validate(&empty).is_valid);

        let long = CreateTodoRequest {
            text: "x".repeat(validators::MAX_TEXT_LENGTH + 1),
        };
        assert!(!long.validate(&long).is_valid);
    }

    #[test]
    fn test_update_validation() {
        let toggle_only = UpdateTodoRequest {
            text: None,
            completed: Some(true),
        };
        assert!(toggle_only.validate(&toggle_only).is_valid);

        let empty_text = UpdateTodoRequest {
            text: Some("".to_string()),
            completed: None,
        };
        assert!(!empty_text.validate(&empty_text).is_valid);
    }
}
