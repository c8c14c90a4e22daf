// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassSelector {
    All,
    Only(Vec<String>),
}

impl ClassSelector {
    /// Resolve to page names, keeping the fixed order for `All`.
    pub fn names(&self) -> Vec<String> {
        match self {
            ClassSelector::All => CLASSES.iter().map(|&c| s!(c)).collect(),
            ClassSelector::Only(v) => v.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub classes: ClassSelector,
    pub api_url: String,
    /// Log a failed class and move on instead of aborting the batch.
    pub keep_going: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            classes: ClassSelector::All,
            api_url: s!(WIKI_API),
            keep_going: false,
        }
    }
}

/// Where output lands. JSON goes to `<root>/data`, images to
/// `<root>/resources/<Class>`; image paths inside the JSON are relative to `root`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub root: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ROOT) }
    }
}

impl ExportOptions {
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_SUBDIR)
    }

    pub fn class_resource_dir(&self, class_name: &str) -> PathBuf {
        self.root.join(RESOURCES_SUBDIR).join(class_name)
    }

    pub fn class_json_path(&self, class_id: &str) -> PathBuf {
        self.data_dir().join(format!("{class_id}.json"))
    }

    /// Turn a root-relative asset reference (`resources/Assault/x.png`) into a disk path.
    pub fn resolve(&self, asset_ref: &str) -> PathBuf {
        asset_ref
            .split('/')
            .fold(self.root.clone(), |p, part| p.join(part))
    }
}
