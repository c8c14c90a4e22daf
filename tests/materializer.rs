// tests/materializer.rs
mod common;

use std::fs;

use common::{FakeFetcher, PNG};
use sm2_scrape::ScrapeError;
use sm2_scrape::assets::{Materialized, materialize};

const URL: &str = "https://cdn.test/images/PerkHeavy_Grit.png/revision/latest";

#[test]
fn second_run_hits_the_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("PerkHeavy_Grit.png");
    let fetcher = FakeFetcher::default().with(URL, PNG);

    let first = materialize(&fetcher, URL, &dest).unwrap();
    let second = materialize(&fetcher, URL, &dest).unwrap();

    assert_eq!(first, Materialized::Downloaded { bytes: PNG.len() });
    assert_eq!(second, Materialized::Cached);
    assert_eq!(fetcher.calls_to(URL), 1);
    assert_eq!(fs::read(&dest).unwrap(), PNG);
}

#[test]
fn existing_file_is_never_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("old.png");
    fs::write(&dest, b"stale but kept").unwrap();
    let fetcher = FakeFetcher::default().with(URL, PNG);

    assert_eq!(materialize(&fetcher, URL, &dest).unwrap(), Materialized::Cached);
    assert!(fetcher.calls.borrow().is_empty());
    assert_eq!(fs::read(&dest).unwrap(), b"stale but kept");
}

#[test]
fn non_image_payload_is_rejected_and_not_written() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("x.png");
    let fetcher = FakeFetcher::default().with(URL, "<html>Not Found</html>");

    let err = materialize(&fetcher, URL, &dest).unwrap_err();
    assert!(matches!(err, ScrapeError::NotAnImage { .. }));
    assert!(!dest.exists());
}

#[test]
fn parent_directory_is_not_created() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("missing").join("x.png");
    let fetcher = FakeFetcher::default().with(URL, PNG);

    let err = materialize(&fetcher, URL, &dest).unwrap_err();
    assert!(matches!(err, ScrapeError::Io { .. }));
}

#[test]
fn network_failure_propagates() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("x.png");

    let err = materialize(&FakeFetcher::default(), URL, &dest).unwrap_err();
    assert!(matches!(err, ScrapeError::Body { .. }));
}
