//! Todo API endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use entities::Todo;
use serde::{Deserialize, Serialize};
use todo_store::TodoStore;

use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Validation message when POST lacks a usable `name`.
const MISSING_TODO: &str = "No To-Do provided...";
/// Validation message when PUT lacks a usable `name`.
const MISSING_NAME: &str = "No to-do listed...";

/// The fields a todo exposes over the wire. `created_at` is internal and
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoFields {
    /// Store-assigned identifier.
    pub id: i64,
    /// The to-do text.
    pub name: String,
}

/// Body of the list response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoListBody {
    /// All known todos.
    pub todos: Vec<TodoFields>,
}

/// Maps an entity to its exposed fields. Applied to every success body.
fn todo_fields(todo: &Todo) -> TodoFields {
    TodoFields {
        id: todo.id,
        name: todo.name.clone(),
    }
}

/// Fetch URL for a single todo, used in `Location` headers.
fn todo_location(id: i64) -> String {
    format!("/todos/{id}")
}

/// Request body for create and update. Accepted as JSON or form-encoded.
#[derive(Debug, Default, Deserialize)]
struct TodoPayload {
    name: Option<String>,
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Extracts a non-empty `name` from a JSON or form-encoded body.
///
/// Anything the body cannot yield a name from -- wrong shape, empty value,
/// unparseable payload -- is reported as a validation failure with the
/// operation's message.
fn extract_name(headers: &HeaderMap, body: &Bytes, missing: &str) -> Result<String, ServerError> {
    let payload: TodoPayload = if body.is_empty() {
        TodoPayload::default()
    } else if is_form_encoded(headers) {
        serde_urlencoded::from_bytes(body)
            .map_err(|_| ServerError::Validation(missing.to_string()))?
    } else {
        serde_json::from_slice(body).map_err(|_| ServerError::Validation(missing.to_string()))?
    };

    match payload.name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ServerError::Validation(missing.to_string())),
    }
}

/// Lists all todos.
pub async fn list_todos<S: TodoStore>(
    State(state): State<SharedState<S>>,
) -> ServerResult<Json<TodoListBody>> {
    let todos = state.store.list_todos().await?;

    Ok(Json(TodoListBody {
        todos: todos.iter().map(todo_fields).collect(),
    }))
}

/// Creates a todo.
pub async fn create_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Response> {
    let name = extract_name(&headers, &body, MISSING_TODO)?;

    let todo = state.store.create_todo(&name).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, todo_location(todo.id))],
        Json(todo_fields(&todo)),
    )
        .into_response())
}

/// Gets a todo by id.
pub async fn get_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
) -> ServerResult<Json<TodoFields>> {
    let todo = state
        .store
        .get_todo(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Todo {id}")))?;

    Ok(Json(todo_fields(&todo)))
}

/// Updates a todo's name.
///
/// The update runs unconditionally; a missing id is a storage-level no-op
/// and the follow-up fetch is what reports 404. This mirrors the observed
/// behavior of the original service and is covered by tests as such.
pub async fn update_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Response> {
    let name = extract_name(&headers, &body, MISSING_NAME)?;

    state.store.update_todo_name(id, &name).await?;

    let todo = state
        .store
        .get_todo(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Todo {id}")))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok((
        StatusCode::OK,
        [(header::LOCATION, todo_location(id))],
        Json(todo_fields(&todo)),
    )
        .into_response())
}

/// Deletes a todo. Idempotent: always 204, whether or not the id existed.
pub async fn delete_todo<S: TodoStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
) -> ServerResult<Response> {
    state.store.delete_todo(id).await?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok((
        StatusCode::NO_CONTENT,
        [(header::LOCATION, "/todos".to_string())],
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_extract_name_from_json() {
        let body = Bytes::from(r#"{"name":"Pick up Orange Juice"}"#);
        let name = extract_name(&json_headers(), &body, MISSING_TODO).unwrap();
        assert_eq!(name, "Pick up Orange Juice");
    }

    #[test]
    fn test_extract_name_from_form() {
        let body = Bytes::from("name=Pick+up+Orange+Juice");
        let name = extract_name(&form_headers(), &body, MISSING_TODO).unwrap();
        assert_eq!(name, "Pick up Orange Juice");
    }

    #[test]
    fn test_extract_name_missing_field() {
        let body = Bytes::from(r#"{"other":"x"}"#);
        let err = extract_name(&json_headers(), &body, MISSING_TODO).unwrap_err();
        assert!(matches!(err, ServerError::Validation(msg) if msg == MISSING_TODO));
    }

    #[test]
    fn test_extract_name_empty_value() {
        let body = Bytes::from(r#"{"name":""}"#);
        let err = extract_name(&json_headers(), &body, MISSING_NAME).unwrap_err();
        assert!(matches!(err, ServerError::Validation(msg) if msg == MISSING_NAME));
    }

    #[test]
    fn test_extract_name_empty_body() {
        let body = Bytes::new();
        assert!(extract_name(&json_headers(), &body, MISSING_TODO).is_err());
    }

    #[test]
    fn test_extract_name_malformed_json() {
        let body = Bytes::from("not json");
        assert!(extract_name(&json_headers(), &body, MISSING_TODO).is_err());
    }

    #[test]
    fn test_todo_fields_hides_created_at() {
        let todo = Todo::new(3, "shaped");
        let json = serde_json::to_value(todo_fields(&todo)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "shaped");
        assert!(json.get("created_at").is_none());
    }
}
