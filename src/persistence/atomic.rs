//! Crash-safe document replacement
//!
//! The new text goes to `<name>.tmp` in the same directory, is synced to disk,
//! then renamed over the target. A crash leaves either the old document or the
//! new one, never a partial file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub(crate) fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    if let Err(error) = write_synced(&tmp_path, text) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

/// Write and flush to disk before the caller renames the file into place
fn write_synced(path: &Path, text: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

/// `<dir>/<name>.tmp`, beside the target so the rename stays on one filesystem
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("playerdata"));
    name.push(".tmp");
    path.with_file_name(name)
}
