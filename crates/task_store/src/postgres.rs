//! PostgreSQL task store implementation.

use std::time::Duration;

use async_trait::async_trait;
use entities::Task;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{TaskStore, TaskStoreResult};

/// Connection parameters for the PostgreSQL store.
///
/// Built once at startup and handed to [`PgTaskStore::connect`]; never
/// re-read from the environment per request.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Bound on waiting for a pooled connection.
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "password".to_string(),
            name: "tasks_db".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Task store backed by a PostgreSQL connection pool.
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    /// Connects to the database and bootstraps the schema.
    pub async fn connect(config: &DbConfig) -> TaskStoreResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        Ok(store)
    }

    /// Runs the idempotent schema bootstrap.
    async fn ensure_schema(&self) -> TaskStoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("Task schema ensured");
        Ok(())
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, title FROM tasks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title)| Task { id, title })
            .collect())
    }

    async fn create_task(&self, title: &str) -> TaskStoreResult<Task> {
        let id: i64 = sqlx::query_scalar("INSERT INTO tasks (title) VALUES ($1) RETURNING id")
            .bind(title)
            .fetch_one(&self.pool)
            .await?;

        Ok(Task::new(id, title))
    }
}

/// SQL schema definition
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL
);
"#;
