use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskzError>;

#[derive(Debug, Error)]
pub enum TaskzError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}
