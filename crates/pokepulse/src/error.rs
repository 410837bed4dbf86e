#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Unable to determine the user data directory")]
    NoDataDir,

    #[error("Failed to write score history: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to encode score history: {0}")]
    Encode(#[from] serde_json::Error),
}
