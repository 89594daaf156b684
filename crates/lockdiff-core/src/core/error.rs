use thiserror::Error;

pub type LockResult<T> = Result<T, LockError>;

#[derive(Error, Debug)]
pub enum LockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lockfile error: {0}")]
    Lockfile(String),

    #[error("Checksum error: {0}")]
    Checksum(String),

    #[error("Verification failed: {0}")]
    Verification(String),
}
