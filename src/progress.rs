// src/progress.rs
use std::path::Path;

/// Progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of classes to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A class JSON file was written.
    fn item_done(&mut self, _class: &str, _path: &Path) {}

    /// A class failed and the run is continuing without it.
    fn item_failed(&mut self, _class: &str, _err: &crate::ScrapeError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
