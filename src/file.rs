// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::error::{Result, ScrapeError};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::io(
            "creating directory",
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io("creating directory", dir, e))?;
    }
    Ok(())
}

/// Pretty-print `value` (2-space indent, no trailing newline) to `path`, truncating it.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| ScrapeError::io("creating", path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|source| ScrapeError::Json { path: path.to_path_buf(), source })?;
    out.flush().map_err(|e| ScrapeError::io("writing", path, e))?;
    Ok(())
}
