use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize profile as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize profile as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
