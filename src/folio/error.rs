use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// A required create field was absent or empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The item type string is outside the Project/Certificate/Skill enumeration.
    #[error("unknown item type: {0}")]
    InvalidKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An error message reported by the server (non-2xx response body).
    #[error("Api Error: {0}")]
    Api(String),
}

impl FolioError {
    /// True for errors the HTTP layer maps to 400 rather than 500.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FolioError::MissingField(_) | FolioError::InvalidKind(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
