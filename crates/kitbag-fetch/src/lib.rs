//! HTTP downloading plus download-and-extract combinators.
//!
//! Downloads go through the [`HttpClient`] trait so tests never touch the
//! network; [`ReqwestClient`] is the production implementation. Fetches are
//! single-shot with no retry policy: transport and HTTP-status failures
//! propagate to the caller.

pub use self::error::{FetchError, Result};
pub use self::http::HttpClient;

#[cfg(feature = "reqwest")]
pub use self::http::ReqwestClient;

mod error;
mod http;

use std::path::{Path, PathBuf};

/// Downloads `url` and writes the body to `dest`, or to a kept temporary
/// file when `dest` is `None`. Returns the written path.
pub async fn download<C: HttpClient>(
    client: &C,
    url: &str,
    dest: Option<&Path>,
) -> Result<PathBuf> {
    let body = client
        .get(url)
        .await
        .map_err(|e| FetchError::Http(Box::new(e)))?;

    let path = match dest {
        Some(p) => p.to_path_buf(),
        None => {
            let (_, path) = tempfile::NamedTempFile::new()?
                .keep()
                .map_err(|e| FetchError::Io(e.error))?;
            path
        }
    };
    tokio::fs::write(&path, &body).await?;
    tracing::debug!(url, path = %path.display(), bytes = body.len(), "downloaded");

    Ok(path)
}

/// Downloads the tar.gz archive at `url` and extracts it (or one `member`)
/// into `dir`. The intermediate file is removed in all cases.
pub async fn download_and_extract_tar_gz<C: HttpClient>(
    client: &C,
    url: &str,
    dir: impl AsRef<Path>,
    member: Option<&str>,
) -> Result<PathBuf> {
    let tmp = download(client, url, None).await?;
    let extracted = kitbag_archive::extract_tar_gz(&tmp, dir, member);
    tokio::fs::remove_file(&tmp).await?;
    Ok(extracted?)
}

/// Downloads the gzip file at `url` and decompresses it into `dir`. The
/// intermediate file is removed in all cases.
pub async fn download_and_extract_gz<C: HttpClient>(
    client: &C,
    url: &str,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let tmp = download(client, url, None).await?;
    let extracted = kitbag_archive::extract_gz(&tmp, dir);
    tokio::fs::remove_file(&tmp).await?;
    Ok(extracted?)
}
