//! SQLite-backed todo store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::Todo;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::{StoreResult, TodoStore};

/// SQL schema definition, applied at connect time.
///
/// The schema is deliberately defined here as plain SQL rather than derived
/// from the entity type; the entity is the in-memory representation only.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// Row shape of the `todos` table. Timestamps are stored as RFC 3339 text.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    name: String,
    created_at: String,
}

impl TodoRow {
    fn into_todo(self) -> StoreResult<Todo> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)?.with_timezone(&Utc);
        Ok(Todo {
            id: self.id,
            name: self.name,
            created_at,
        })
    }
}

/// SQLite-backed todo store.
///
/// The database file is created on first connect (`mode=rwc` URLs) and the
/// schema is applied if missing.
pub struct SqliteTodoStore {
    pool: Pool<Sqlite>,
}

impl SqliteTodoStore {
    /// Connects to the database at the given URL and ensures the schema
    /// exists.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.apply_schema().await?;

        Ok(store)
    }

    /// Connects to a private in-memory database. Intended for tests.
    ///
    /// A single connection is used: every pooled connection to
    /// `sqlite::memory:` would otherwise open its own empty database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.apply_schema().await?;

        Ok(store)
    }

    async fn apply_schema(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("todos schema ensured");
        Ok(())
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn create_todo(&self, name: &str) -> StoreResult<Todo> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO todos (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            created_at,
        })
    }

    async fn get_todo(&self, id: i64) -> StoreResult<Option<Todo>> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, name, created_at FROM todos WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    async fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, name, created_at FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    async fn update_todo_name(&self, id: i64, name: &str) -> StoreResult<()> {
        // Unconditional: zero affected rows is not an error. Callers that
        // need to report a missing id fetch after updating.
        sqlx::query("UPDATE todos SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
