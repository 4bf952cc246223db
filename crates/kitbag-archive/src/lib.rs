//! Gzip and tar.gz helpers.
//!
//! Thin wrappers over `flate2` and `tar` that cover the common
//! compress/extract moves: whole-archive or single-member tar.gz
//! extraction, plain gzip round trips, and optional delete-the-source
//! semantics for compression. Destinations are created on demand;
//! everything else propagates as I/O errors.

pub use self::error::{Error, Result};
pub use self::gz::{compress_gz, extract_gz, extract_gz_to_string};
pub use self::tar_gz::{compress_tar_gz, extract_tar_gz};

mod error;
mod gz;
mod tar_gz;
