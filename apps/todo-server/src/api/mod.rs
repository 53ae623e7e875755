//! API endpoints.

pub mod todo;

use axum::{
    Router,
    response::Html,
    routing::get,
};
use todo_store::TodoStore;

use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TodoStore + 'static>() -> Router<SharedState<S>> {
    Router::new()
        // Human-facing index page
        .route("/", get(index))
        // Todo collection
        .route("/todos", get(todo::list_todos).post(todo::create_todo))
        // Single todo
        .route(
            "/todos/:id",
            get(todo::get_todo)
                .put(todo::update_todo)
                .delete(todo::delete_todo),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Serves the human-facing index page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>My TODOs</title>
</head>
<body>
    <h1>My TODOs</h1>
    <p>The to-do collection lives at <a href="/todos">/todos</a>.</p>
</body>
</html>
"#;
