//! Filesystem odds and ends.
//!
//! Recursive ownership changes that report per-entry failures instead of
//! aborting, newline-record counting, JSON map loading, and colored
//! OK/FAILED status lines for scripts.

pub use self::error::{Error, Result};
pub use self::lines::line_count;
pub use self::status::{print_failed, print_ok, print_status};

#[cfg(unix)]
pub use self::chown::{ChownFailure, chown_recursive};

#[cfg(unix)]
mod chown;
mod error;
mod lines;
mod status;

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

/// Reads a JSON object from the file at `path` into a string-keyed map.
pub fn read_map(path: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}
