use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Config error: {0}")]
    Config(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
