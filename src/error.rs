pub type PlacardResult<T> = Result<T, PlacardError>;

#[derive(thiserror::Error, Debug)]
pub enum PlacardError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render unavailable: {0}")]
    RenderUnavailable(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render_unavailable(msg: impl Into<String>) -> Self {
        Self::RenderUnavailable(msg.into())
    }

    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
