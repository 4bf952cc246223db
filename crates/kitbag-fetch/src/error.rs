use std::io;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Archive(#[from] kitbag_archive::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
