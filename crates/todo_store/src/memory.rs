//! In-memory todo store implementation for testing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use entities::Todo;
use tokio::sync::RwLock;

use crate::{StoreResult, TodoStore};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

/// In-memory todo store for testing purposes.
///
/// Ids are assigned from a monotonically increasing counter, matching the
/// fresh-id guarantee of the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    /// Creates a new in-memory todo store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create_todo(&self, name: &str) -> StoreResult<Todo> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let todo = Todo::new(inner.next_id, name);
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get_todo(&self, id: i64) -> StoreResult<Option<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).cloned())
    }

    async fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn update_todo_name(&self, id: i64, name: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(todo) = inner.todos.get_mut(&id) {
            todo.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.todos.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let store = MemoryTodoStore::new();

        let first = store.create_todo("one").await.unwrap();
        let second = store.create_todo("two").await.unwrap();

        assert_ne!(first.id, second.id);

        // An id freed by delete is never reused.
        store.delete_todo(second.id).await.unwrap();
        let third = store.create_todo("three").await.unwrap();
        assert_ne!(third.id, second.id);
    }

    #[tokio::test]
    async fn test_get_returns_created_name() {
        let store = MemoryTodoStore::new();

        let todo = store.create_todo("Pick up Orange Juice").await.unwrap();
        let fetched = store.get_todo(todo.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Pick up Orange Juice");
        assert_eq!(fetched.id, todo.id);
    }

    #[tokio::test]
    async fn test_list_returns_all_in_insertion_order() {
        let store = MemoryTodoStore::new();

        for name in ["a", "b", "c"] {
            store.create_todo(name).await.unwrap();
        }

        let todos = store.list_todos().await.unwrap();
        let names: Vec<&str> = todos.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_name_only() {
        let store = MemoryTodoStore::new();

        let todo = store.create_todo("before").await.unwrap();
        store.update_todo_name(todo.id, "after").await.unwrap();

        let updated = store.get_todo(todo.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "after");
        assert_eq!(updated.id, todo.id);
        assert_eq!(updated.created_at, todo.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let store = MemoryTodoStore::new();

        store.update_todo_name(99, "ghost").await.unwrap();

        assert!(store.get_todo(99).await.unwrap().is_none());
        assert!(store.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryTodoStore::new();

        let todo = store.create_todo("gone").await.unwrap();
        store.delete_todo(todo.id).await.unwrap();
        assert!(store.get_todo(todo.id).await.unwrap().is_none());

        // Deleting again (or a never-existing id) still succeeds.
        store.delete_todo(todo.id).await.unwrap();
        store.delete_todo(12345).await.unwrap();
    }
}
