use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown user: '{0}'")]
    UnknownUser(String),

    #[error("unknown group: '{0}'")]
    UnknownGroup(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
