// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Every way a class scrape can fail.
///
/// Page-structure variants carry enough position info (row/cell, 1-based,
/// header row excluded) to find the offending markup on the wiki.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("reading response body from {url}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("wiki response for page {page:?} is not a parse envelope")]
    Envelope {
        page: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("wiki API rejected page {page:?}: {code}: {info}")]
    Api { page: String, code: String, info: String },

    #[error("no table with class {class:?} on the page")]
    MissingTable { class: &'static str },

    #[error("expected at least {wanted} tables with class {class:?}, found {found}")]
    MissingNthTable {
        class: &'static str,
        wanted: usize,
        found: usize,
    },

    #[error("perk tree table has no header row")]
    MissingHeader,

    #[error("header {label:?} has invalid colspan {raw:?}")]
    BadColspan { label: String, raw: String },

    #[error("perk tree row {row} has {cells} cells but the header maps only {columns} columns")]
    RowOverflow { row: usize, cells: usize, columns: usize },

    #[error("perk tree row {row}, cell {cell}: header key {key:?} matches no known column")]
    UnknownColumn { row: usize, cell: usize, key: String },

    #[error("perk tree row {row}, cell {cell} ({name:?}) has no element with a title attribute")]
    MissingTooltip { row: usize, cell: usize, name: String },

    #[error("payload from {url} is not a recognised image (destination {})", .path.display())]
    NotAnImage { url: String, path: PathBuf },

    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encoding {} as JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("class {class} failed")]
    Class {
        class: String,
        #[source]
        source: Box<ScrapeError>,
    },
}

impl ScrapeError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { action, path: path.into(), source }
    }

    pub(crate) fn in_class(self, class: &str) -> Self {
        Self::Class { class: s!(class), source: Box::new(self) }
    }

    /// This error followed by every underlying cause, `: `-separated.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(e) = cause {
            out.push_str(": ");
            out.push_str(&e.to_string());
            cause = std::error::Error::source(e);
        }
        out
    }
}
