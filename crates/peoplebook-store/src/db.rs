use crate::error::Result;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Opens the key-value database in WAL mode and makes it private to the
/// current user.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    make_private(path)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

/// The WAL, shared-memory and rollback journal files SQLite keeps beside
/// `path`.
pub(crate) fn sidecar_paths(path: &Path) -> Vec<PathBuf> {
    SIDECAR_SUFFIXES
        .iter()
        .map(|suffix| {
            let mut name = path.as_os_str().to_owned();
            name.push(suffix);
            PathBuf::from(name)
        })
        .collect()
}

/// Restricts the database file and whichever sidecars exist to 0600.
pub(crate) fn make_private(path: &Path) -> Result<()> {
    set_owner_only(path)?;
    for sidecar in sidecar_paths(path) {
        set_owner_only(&sidecar)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_owner_only(file: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if file.exists() {
        fs::set_permissions(file, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn set_owner_only(_file: &Path) -> Result<()> {
    Ok(())
}
