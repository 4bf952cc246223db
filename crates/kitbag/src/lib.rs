//! Umbrella crate re-exporting the kitbag helpers.
//!
//! - [`rank`]: ranked-list maintenance and multiset difference
//! - [`verify`]: file size and SHA-512 digest checks
//! - [`archive`]: gzip and tar.gz helpers
//! - [`fetch`]: HTTP downloads and download-and-extract combinators
//! - [`fs`]: recursive chown, line counts, JSON maps, status lines

pub use kitbag_archive as archive;
pub use kitbag_fetch as fetch;
pub use kitbag_fs as fs;
pub use kitbag_rank as rank;
pub use kitbag_verify as verify;
