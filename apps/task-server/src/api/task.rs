//! Task API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use entities::Task;
use serde::Deserialize;
use task_store::TaskStore;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title. Required; a missing or null title is a client error.
    pub title: Option<String>,
}

/// Lists all tasks in insertion order.
pub async fn list_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.list_tasks().await?;
    Ok(Json(tasks))
}

/// Creates a new task.
pub async fn create_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateTaskRequest>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    let title = request
        .title
        .ok_or_else(|| ServerError::InvalidRequest("Missing required field: title".to_string()))?;

    let task = state.store.create_task(&title).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::response::IntoResponse;
    use task_store::{DbConfig, MemoryTaskStore};

    use super::*;
    use crate::config::Config;
    use crate::state::{SharedState, create_shared_state};

    fn test_state() -> SharedState<MemoryTaskStore> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            db: DbConfig::default(),
            cors_origins: None,
            request_timeout: Duration::from_secs(5),
            log_level: "info".to_string(),
        };
        create_shared_state(config, MemoryTaskStore::new())
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let state = test_state();

        let Json(tasks) = list_tasks(State(state)).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_created_task() {
        let state = test_state();

        let request = CreateTaskRequest {
            title: Some("Buy milk".to_string()),
        };
        let (status, Json(task)) = create_task(State(state), Json(request)).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(task.title, "Buy milk");
        assert!(task.id > 0);
    }

    #[tokio::test]
    async fn test_create_missing_title_is_client_error() {
        let state = test_state();

        let request = CreateTaskRequest { title: None };
        let err = create_task(State(state), Json(request)).await.unwrap_err();

        assert!(matches!(&err, ServerError::InvalidRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let state = test_state();

        let titles = ["Buy milk", "Water plants", "Walk the dog"];
        let mut created_ids = Vec::new();
        for title in titles {
            let request = CreateTaskRequest {
                title: Some(title.to_string()),
            };
            let (_, Json(task)) = create_task(State(state.clone()), Json(request)).await.unwrap();
            created_ids.push(task.id);
        }

        let Json(tasks) = list_tasks(State(state)).await.unwrap();
        assert_eq!(tasks.len(), titles.len());
        for ((task, title), id) in tasks.iter().zip(titles).zip(created_ids) {
            assert_eq!(task.title, title);
            assert_eq!(task.id, id);
        }
    }
}
