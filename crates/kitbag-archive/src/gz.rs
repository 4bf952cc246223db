use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{Error, Result};

/// Decompresses the gzip file at `file` into `dir`, creating `dir` if it
/// does not exist.
///
/// The output file keeps the input's name minus its `.gz` suffix. Returns
/// the path of the decompressed file.
pub fn extract_gz(file: impl AsRef<Path>, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let file = file.as_ref();
    let dir = dir.as_ref();

    let name = file
        .file_name()
        .ok_or_else(|| Error::NoFileName(file.to_path_buf()))?
        .to_string_lossy();
    let name = name.strip_suffix(".gz").unwrap_or(&name);

    fs::create_dir_all(dir)?;
    let outfile = dir.join(name);

    let mut decoder = GzDecoder::new(File::open(file)?);
    let mut out = File::create(&outfile)?;
    io::copy(&mut decoder, &mut out)?;

    Ok(outfile)
}

/// Decompresses the gzip file at `file` straight into a UTF-8 string.
pub fn extract_gz_to_string(file: impl AsRef<Path>) -> Result<String> {
    let mut decoder = GzDecoder::new(File::open(file.as_ref())?);
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

/// Compresses the file at `file` into gzip format.
///
/// With no `dest`, the archive lands next to the input with `.gz` appended.
/// When `delete_source` is set, the input file is removed afterwards.
/// Returns the archive path.
pub fn compress_gz(
    file: impl AsRef<Path>,
    dest: Option<PathBuf>,
    delete_source: bool,
) -> Result<PathBuf> {
    let file = file.as_ref();
    let dest = dest.unwrap_or_else(|| {
        let mut name = OsString::from(file.as_os_str());
        name.push(".gz");
        PathBuf::from(name)
    });

    let mut encoder = GzEncoder::new(File::create(&dest)?, Compression::default());
    io::copy(&mut File::open(file)?, &mut encoder)?;
    encoder.finish()?;

    if delete_source {
        fs::remove_file(file)?;
    }

    Ok(dest)
}
