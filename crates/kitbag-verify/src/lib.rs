//! File verification: size checks and content digests.
//!
//! Both checks answer "does this file on disk match what I was told to
//! expect" with a plain boolean; only I/O trouble surfaces as an error.
//! Digests stream through a fixed buffer, so large files never land in
//! memory whole.
//!
//! # Example
//!
//! ```no_run
//! use kitbag_verify::check_sha512;
//!
//! let ok = check_sha512("artifact.tar.gz", "9b71d224bd62f378...")?;
//! assert!(ok);
//! # Ok::<(), kitbag_verify::VerifyError>(())
//! ```

pub use self::error::{Result, VerifyError};
pub use self::hasher::{Hasher, Sha512Hasher};

mod error;
mod hasher;

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Compares the size of the file at `path` against `expected` bytes.
pub fn check_size(path: impl AsRef<Path>, expected: u64) -> Result<bool> {
    let path = path.as_ref();
    let actual = fs::metadata(path)?.len();
    tracing::debug!(path = %path.display(), actual, expected, "size check");
    Ok(actual == expected)
}

/// Compares the SHA-512 digest of the file at `path` against `expected_hex`.
///
/// The comparison ignores hex case.
pub fn check_sha512(path: impl AsRef<Path>, expected_hex: &str) -> Result<bool> {
    let path = path.as_ref();
    let actual = hex::encode(file_digest(path, Sha512Hasher::new())?);
    tracing::debug!(path = %path.display(), %actual, expected = expected_hex, "digest check");
    Ok(actual.eq_ignore_ascii_case(expected_hex))
}

/// Streams the file at `path` through `hasher` and returns the raw digest.
pub fn file_digest<H: Hasher>(path: impl AsRef<Path>, mut hasher: H) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}
