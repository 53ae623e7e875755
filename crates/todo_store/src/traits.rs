//! Todo store trait definitions.

use async_trait::async_trait;
use entities::Todo;

use crate::StoreResult;

/// Trait for to-do storage operations.
///
/// Deletes and name updates are deliberately unconditional: a missing id is
/// a silent no-op, not an error. Callers that need to report a missing id
/// (the PUT handler) fetch after updating.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Creates a to-do with the given name and returns it, including the
    /// store-assigned id. The name is assumed pre-validated by the caller.
    async fn create_todo(&self, name: &str) -> StoreResult<Todo>;

    /// Gets a to-do by id, or `None` if no such row exists.
    async fn get_todo(&self, id: i64) -> StoreResult<Option<Todo>>;

    /// Lists all to-dos in insertion order.
    async fn list_todos(&self) -> StoreResult<Vec<Todo>>;

    /// Overwrites the name of the to-do with the given id. `created_at`
    /// is untouched. A missing id is a no-op.
    async fn update_todo_name(&self, id: i64, name: &str) -> StoreResult<()>;

    /// Deletes the to-do with the given id. Idempotent.
    async fn delete_todo(&self, id: i64) -> StoreResult<()>;
}
