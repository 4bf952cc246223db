use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("archive member not found: '{0}'")]
    MemberNotFound(String),

    #[error("path has no file name: '{0}'")]
    NoFileName(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
