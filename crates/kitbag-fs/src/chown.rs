use std::fs;
use std::path::{Path, PathBuf};

use nix::unistd::{Gid, Group, Uid, User, chown};

use crate::error::{Error, Result};

/// One entry the ownership change could not be applied to.
#[derive(Debug)]
pub struct ChownFailure {
    pub path: PathBuf,
    pub error: std::io::Error,
}

/// Recursively changes ownership of `path` and everything under it to
/// `user` (and `group`, when given).
///
/// Name lookup failures are hard errors: asking for a user that does not
/// exist is a caller mistake, not a partial result. Per-entry chown
/// failures are best-effort instead: each one is logged at `warn` and
/// collected into the returned list, so the caller decides whether a
/// partial failure is fatal. An empty list means every entry succeeded.
pub fn chown_recursive(
    path: impl AsRef<Path>,
    user: &str,
    group: Option<&str>,
) -> Result<Vec<ChownFailure>> {
    let uid = User::from_name(user)
        .map_err(std::io::Error::from)?
        .ok_or_else(|| Error::UnknownUser(user.to_string()))?
        .uid;
    let gid = group
        .map(|name| {
            Group::from_name(name)
                .map_err(std::io::Error::from)?
                .ok_or_else(|| Error::UnknownGroup(name.to_string()))
                .map(|g| g.gid)
        })
        .transpose()?;

    let mut failures = Vec::new();
    walk(path.as_ref(), uid, gid, &mut failures);
    Ok(failures)
}

fn walk(path: &Path, uid: Uid, gid: Option<Gid>, failures: &mut Vec<ChownFailure>) {
    let chown_failed = match chown(path, Some(uid), gid) {
        Ok(()) => false,
        Err(e) => {
            record(path, e.into(), failures);
            true
        }
    };
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            // A directory that already failed to chown gets one record, not
            // one per failing call.
            if !chown_failed {
                record(path, e, failures);
            }
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                record(path, e, failures);
                continue;
            }
        };
        let child = entry.path();
        // Do not follow symlinks into other trees.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            walk(&child, uid, gid, failures);
        } else if let Err(e) = chown(&child, Some(uid), gid) {
            record(&child, e.into(), failures);
        }
    }
}

fn record(path: &Path, error: std::io::Error, failures: &mut Vec<ChownFailure>) {
    tracing::warn!(path = %path.display(), %error, "ownership change failed");
    failures.push(ChownFailure {
        path: path.to_path_buf(),
        error,
    });
}
