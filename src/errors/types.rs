use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("File error: {0}")]
    File(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),
}
