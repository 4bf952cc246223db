use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{Error, Result};

/// Extracts the tar.gz archive at `file` into `dir`, creating `dir` if it
/// does not exist.
///
/// With `member` set, only the entry whose path matches it is extracted;
/// an entry that is not present is [`Error::MemberNotFound`]. Returns the
/// destination directory.
pub fn extract_tar_gz(
    file: impl AsRef<Path>,
    dir: impl AsRef<Path>,
    member: Option<&str>,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut archive = tar::Archive::new(GzDecoder::new(File::open(file.as_ref())?));
    match member {
        None => archive.unpack(dir)?,
        Some(name) => {
            let wanted = Path::new(name);
            let mut found = false;
            for entry in archive.entries()? {
                let mut entry = entry?;
                if entry.path()? == wanted {
                    entry.unpack_in(dir)?;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::MemberNotFound(name.to_string()));
            }
        }
    }

    Ok(dir.to_path_buf())
}

/// Compresses the file or directory at `path` into a tar.gz archive,
/// rooted at its base name.
///
/// With no `dest`, the archive is written to a kept temporary file. When
/// `delete_source` is set, the source file or tree is removed afterwards.
/// Returns the archive path.
pub fn compress_tar_gz(
    path: impl AsRef<Path>,
    dest: Option<PathBuf>,
    delete_source: bool,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .ok_or_else(|| Error::NoFileName(path.to_path_buf()))?;

    let (out, dest) = match dest {
        Some(dest) => (File::create(&dest)?, dest),
        None => tempfile::NamedTempFile::new()?
            .keep()
            .map_err(|e| Error::Io(e.error))?,
    };

    let mut builder = tar::Builder::new(GzEncoder::new(out, Compression::default()));
    if path.is_dir() {
        builder.append_dir_all(name, path)?;
    } else {
        builder.append_path_with_name(path, name)?;
    }
    builder.into_inner()?.finish()?;

    if delete_source {
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
    }

    Ok(dest)
}
