use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Counts newline-delimited records in the file at `path`.
///
/// A trailing partial line counts as a record, matching line-iteration
/// semantics rather than a raw newline count.
pub fn line_count(path: impl AsRef<Path>) -> Result<u64> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut buf = Vec::new();
    let mut count = 0u64;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
    }
    Ok(count)
}
