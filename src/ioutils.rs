use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the output directory does not exist yet.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| Error::io(dest_path, e))
}

/// Reads a text file, treating a missing file as `None`.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Writes `content`, creating parent directories first.
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(content: C, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|e| Error::io(dest_path, e))
}

/// Copies a file, creating parent directories first.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path)
        .map(|_| ())
        .map_err(|e| Error::io(source_path, e))
}

/// Removes a file or a whole directory tree if present.
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else if path.exists() {
        std::fs::remove_file(path)
    } else {
        return Ok(false);
    };
    result.map(|_| true).map_err(|e| Error::io(path, e))
}
