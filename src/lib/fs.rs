//! Whole-file helpers for the env, recap and forge output files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::lib::errors::FileError;

/// Read a file as UTF-8, replacing invalid byte sequences instead of failing.
pub fn read_text_lossy(path: &Path) -> Result<String, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Like [`read_text_lossy`], but a missing file reads as empty text.
pub fn read_text_or_empty(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Ok(String::new());
    }
    read_text_lossy(path)
}

/// Write `text` exactly as given. No newline translation happens.
pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    fs::write(path, text.as_bytes()).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create the parent directory chain of `path` when it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<Option<PathBuf>, FileError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(None);
    };
    fs::create_dir_all(parent).map_err(|source| FileError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;
    Ok(Some(parent.to_path_buf()))
}
