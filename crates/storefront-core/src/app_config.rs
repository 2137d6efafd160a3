use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend REST API, e.g. `http://localhost:8080`.
    pub api_host: String,
    pub env: Environment,
    pub log_level: String,
    /// Directory holding durable local storage (the persisted cart).
    pub data_dir: PathBuf,
    /// HTTP request timeout; `0` means requests never time out.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Lifetime of the "item added" toast.
    pub notification_secs: u64,
    /// Lifetime of the "order placed" modal.
    pub success_secs: u64,
}
