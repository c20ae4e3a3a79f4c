use crate::db;
use crate::error::{Result, StoreError};
use crate::paths;
use rusqlite::backup::Backup;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PAGES_PER_STEP: i32 = 100;
const PAUSE_BETWEEN_STEPS: Duration = Duration::from_millis(10);

/// Copies the live database into `path` with SQLite's online backup API.
/// The destination may not alias the live database file or its WAL/SHM
/// sidecars.
pub fn backup_to(conn: &Connection, path: &Path) -> Result<PathBuf> {
    paths::ensure_parent_dir(path)?;
    let target = absolute_target(path)?;
    if let Some(live) = live_db_file(conn)? {
        if aliases_live_db(&target, &live)? {
            return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
        }
    }

    let mut dest = Connection::open(&target)?;
    {
        let backup = Backup::new(conn, &mut dest)?;
        backup.run_to_completion(PAGES_PER_STEP, PAUSE_BETWEEN_STEPS, None)?;
    }
    drop(dest);
    db::make_private(&target)?;
    tracing::debug!(path = %target.display(), "backup written");
    Ok(target)
}

fn absolute_target(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(fs::canonicalize(parent)?.join(file_name))
}

fn live_db_file(conn: &Connection) -> Result<Option<PathBuf>> {
    match conn.path() {
        Some(file) if !file.is_empty() => Ok(Some(fs::canonicalize(file)?)),
        _ => Ok(None),
    }
}

fn aliases_live_db(target: &Path, live: &Path) -> Result<bool> {
    if target == live {
        return Ok(true);
    }
    if db::sidecar_paths(live).iter().any(|sidecar| sidecar == target) {
        return Ok(true);
    }
    same_inode(target, live)
}

#[cfg(unix)]
fn same_inode(target: &Path, live: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !live.exists() {
        return Ok(false);
    }
    let a = fs::metadata(target)?;
    let b = fs::metadata(live)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn same_inode(_target: &Path, _live: &Path) -> Result<bool> {
    Ok(false)
}
