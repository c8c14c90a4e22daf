// tests/pipeline_e2e.rs
mod common;

use std::fs;

use std::path::Path;

use common::{API, ASSAULT_IMAGES, ASSAULT_JSON, FakeFetcher, PNG};
use sm2_scrape::ScrapeError;
use sm2_scrape::config::options::{AppOptions, ClassSelector};
use sm2_scrape::progress::Progress;
use sm2_scrape::runner;

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    lines: Vec<String>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, class: &str, _path: &Path) {
        self.done.push(class.to_string());
    }
    fn item_failed(&mut self, class: &str, _err: &ScrapeError) {
        self.failed.push(class.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

fn options(root: &Path, classes: &[&str]) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape.api_url = API.to_string();
    opts.scrape.classes = ClassSelector::Only(classes.iter().map(|c| c.to_string()).collect());
    opts.export.root = root.to_path_buf();
    opts
}

#[test]
fn assault_page_matches_golden_json() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::assault();
    let summary = runner::run(&options(tmp.path(), &["Assault"]), &fetcher, None).unwrap();

    let json_path = tmp.path().join("data").join("assault.json");
    assert_eq!(summary.files_written, [json_path.clone()]);
    assert_eq!(fs::read_to_string(&json_path).unwrap(), ASSAULT_JSON);

    let res = tmp.path().join("resources").join("Assault");
    for file in ["PerkAssault_Charge.png", "Perk_Quick_Hands.png", "Prestige_perk_Veteran_Tactics.png"] {
        assert!(res.join(file).is_file(), "{file} not downloaded");
    }
    assert_eq!(summary.images_downloaded, 3);
    assert_eq!(summary.images_cached, 0);
}

#[test]
fn rerun_reuses_images_and_rewrites_identical_json() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::assault();
    let opts = options(tmp.path(), &["Assault"]);

    runner::run(&opts, &fetcher, None).unwrap();
    let again = runner::run(&opts, &fetcher, None).unwrap();

    assert_eq!(again.images_downloaded, 0);
    assert_eq!(again.images_cached, 3);
    for url in ASSAULT_IMAGES {
        assert_eq!(fetcher.calls_to(url), 1);
    }
    let written = fs::read_to_string(tmp.path().join("data").join("assault.json")).unwrap();
    assert_eq!(written, ASSAULT_JSON);
}

#[test]
fn failing_class_aborts_the_batch_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::assault().with_page("Heavy", "<p>no tables</p>");

    let err = runner::run(&options(tmp.path(), &["Heavy", "Assault"]), &fetcher, None).unwrap_err();

    match &err {
        ScrapeError::Class { class, source } => {
            assert_eq!(class, "Heavy");
            assert!(matches!(**source, ScrapeError::MissingTable { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!tmp.path().join("data").join("heavy.json").exists());
    assert!(!tmp.path().join("data").join("assault.json").exists());
}

#[test]
fn keep_going_collects_failures_and_continues() {
    let tmp = tempfile::tempdir().unwrap();
    // No page registered for Heavy: the fetch itself fails with an underlying io cause.
    let fetcher = FakeFetcher::assault();
    let mut opts = options(tmp.path(), &["Heavy", "Assault"]);
    opts.scrape.keep_going = true;

    let mut progress = Recorder::default();
    let summary = runner::run(&opts, &fetcher, Some(&mut progress as &mut dyn Progress)).unwrap();

    assert_eq!(summary.failed.len(), 1);
    let (class, err) = &summary.failed[0];
    assert_eq!(class, "Heavy");
    let chain = err.chain();
    assert!(chain.starts_with("reading response body from https://wiki.test/api.php"), "{chain}");
    assert!(chain.ends_with(": no fixture for url"), "{chain}");

    assert_eq!(summary.files_written.len(), 1);
    assert!(tmp.path().join("data").join("assault.json").is_file());
    assert_eq!(progress.failed, ["Heavy"]);
    assert_eq!(progress.done, ["Assault"]);
}

#[test]
fn progress_hears_about_downloads_and_cache_hits() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::assault();
    let opts = options(tmp.path(), &["Assault"]);

    let first = runner::run(&opts, &fetcher, None).unwrap();
    assert_eq!(first.bytes_downloaded, 3 * PNG.len());

    let mut progress = Recorder::default();
    let again = runner::run(&opts, &fetcher, Some(&mut progress as &mut dyn Progress)).unwrap();

    assert_eq!(again.bytes_downloaded, 0);
    assert_eq!(progress.total, Some(1));
    assert!(progress.finished);
    assert_eq!(
        progress.lines,
        ["Scraping Assault…", "Assault: 0 images downloaded (0 bytes), 3 already cached"]
    );
}

#[test]
fn extract_class_is_pure() {
    let (descriptor, images) = runner::extract_class(common::ASSAULT_HTML, "Assault").unwrap();
    assert_eq!(descriptor.perk_count(), 4);
    assert_eq!(descriptor.prestige.len(), 2);
    let urls: Vec<_> = images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, ASSAULT_IMAGES);
}
