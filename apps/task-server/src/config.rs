//! Server configuration.

use std::{env, time::Duration};

use task_store::DbConfig;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database connection parameters.
    pub db: DbConfig,
    /// Allowed CORS origins; `None` permits all origins.
    pub cors_origins: Option<Vec<String>>,
    /// Request-level timeout.
    pub request_timeout: Duration,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every option has a default, so an empty environment yields a working
    /// configuration. Read once at startup; never re-read per request.
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig {
            host: env::var("DB_HOST").unwrap_or_else(|_| "db".to_string()),
            port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            name: env::var("DB_NAME").unwrap_or_else(|_| "tasks_db".to_string()),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            acquire_timeout: Duration::from_secs(
                env::var("DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .unwrap_or(5),
            ),
        };

        Ok(Self {
            host: env::var("TASKLIST_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TASKLIST_SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            db,
            cors_origins: env::var("TASKLIST_CORS_ORIGINS")
                .ok()
                .map(|raw| parse_origins(&raw)),
            request_timeout: Duration::from_secs(
                env::var("TASKLIST_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
            log_level: env::var("TASKLIST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("DB_HOST");
            env::remove_var("DB_PORT");
            env::remove_var("DB_USER");
            env::remove_var("DB_PASSWORD");
            env::remove_var("DB_NAME");
            env::remove_var("DB_MAX_CONNECTIONS");
            env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");
            env::remove_var("TASKLIST_SERVER_HOST");
            env::remove_var("TASKLIST_SERVER_PORT");
            env::remove_var("TASKLIST_CORS_ORIGINS");
            env::remove_var("TASKLIST_REQUEST_TIMEOUT_SECS");
            env::remove_var("TASKLIST_LOG_LEVEL");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
        assert_eq!(config.db.host, "db");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.user, "postgres");
        assert_eq!(config.db.name, "tasks_db");
        assert!(config.cors_origins.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://tasks.example.com"),
            vec![
                "http://localhost:5173".to_string(),
                "https://tasks.example.com".to_string()
            ]
        );
        assert!(parse_origins("").is_empty());
    }
}
