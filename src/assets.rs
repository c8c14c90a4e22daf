// src/assets.rs
//! Image materializer: download once, never overwrite.

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::core::Fetch;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Materialized {
    /// File was already there; nothing fetched.
    Cached,
    Downloaded { bytes: usize },
}

/// Fetch `url` into `dest` unless `dest` already exists.
///
/// Does not create parent directories. The payload must sniff as an image,
/// otherwise nothing is written.
pub fn materialize(fetcher: &dyn Fetch, url: &str, dest: &Path) -> Result<Materialized> {
    if dest.exists() {
        debug!(path = %dest.display(), "image cached");
        return Ok(Materialized::Cached);
    }

    let bytes = fetcher.get_bytes(url)?;
    if image::guess_format(&bytes).is_err() {
        return Err(ScrapeError::NotAnImage { url: s!(url), path: dest.to_path_buf() });
    }
    fs::write(dest, &bytes).map_err(|e| ScrapeError::io("writing image", dest, e))?;

    info!(path = %dest.display(), bytes = bytes.len(), "image downloaded");
    Ok(Materialized::Downloaded { bytes: bytes.len() })
}
