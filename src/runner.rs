// src/runner.rs
use std::path::PathBuf;

use scraper::Html;
use tracing::{error, info};

use crate::{
    assets::{self, Materialized},
    config::{options::AppOptions, schema::SECTIONS},
    core::Fetch,
    error::{Result, ScrapeError},
    file::{ensure_directory, write_json},
    model::ClassDescriptor,
    progress::Progress,
    specs::{self, ImageRef},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub images_downloaded: usize,
    pub images_cached: usize,
    pub bytes_downloaded: usize,
    /// Only populated with `keep_going`; otherwise the first failure is returned.
    pub failed: Vec<(String, ScrapeError)>,
}

/// Per-class result of [`build_class`].
pub struct ClassOutput {
    pub descriptor: ClassDescriptor,
    pub downloaded: usize,
    pub cached: usize,
    pub bytes: usize,
}

/// Top-level runner: every selected class, in order.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let classes = opts.scrape.classes.names();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(classes.len());
    }

    let mut summary = RunSummary::default();

    for class_name in &classes {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {class_name}…"));
        }
        match scrape_class(opts, fetcher, class_name) {
            Ok((path, out)) => {
                summary.images_downloaded += out.downloaded;
                summary.images_cached += out.cached;
                summary.bytes_downloaded += out.bytes;
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!(
                        "{class_name}: {} images downloaded ({} bytes), {} already cached",
                        out.downloaded, out.bytes, out.cached
                    ));
                    p.item_done(class_name, &path);
                }
                summary.files_written.push(path);
            }
            Err(e) if opts.scrape.keep_going => {
                error!(class = %class_name, "{}", e.chain());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(class_name, &e);
                }
                summary.failed.push((class_name.clone(), e));
            }
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e.in_class(class_name));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Scrape one class and write `data/<id>.json`. Nothing is written if any step fails.
pub fn scrape_class(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    class_name: &str,
) -> Result<(PathBuf, ClassOutput)> {
    info!(class = class_name, "scraping");
    ensure_directory(&opts.export.class_resource_dir(class_name))?;

    let out = build_class(opts, fetcher, class_name)?;

    ensure_directory(&opts.export.data_dir())?;
    let path = opts.export.class_json_path(&out.descriptor.id);
    write_json(&path, &out.descriptor)?;
    info!(
        class = class_name,
        perks = out.descriptor.perk_count(),
        prestige = out.descriptor.prestige.len(),
        path = %path.display(),
        "wrote class data"
    );
    Ok((path, out))
}

/// Fetch, parse and extract one class; download the images it references.
/// The class resource directory must already exist.
pub fn build_class(opts: &AppOptions, fetcher: &dyn Fetch, class_name: &str) -> Result<ClassOutput> {
    let html = specs::wiki::fetch_page(fetcher, &opts.scrape.api_url, class_name)?;
    let (descriptor, images) = extract_class(&html, class_name)?;

    let mut downloaded = 0;
    let mut cached = 0;
    let mut total_bytes = 0;
    for image in &images {
        let dest = opts.export.resolve(&image.asset);
        match assets::materialize(fetcher, &image.url, &dest)? {
            Materialized::Cached => cached += 1,
            Materialized::Downloaded { bytes } => {
                downloaded += 1;
                total_bytes += bytes;
            }
        }
    }

    Ok(ClassOutput { descriptor, downloaded, cached, bytes: total_bytes })
}

/// Pure HTML → descriptor step, plus the images the page references.
pub fn extract_class(html: &str, class_name: &str) -> Result<(ClassDescriptor, Vec<ImageRef>)> {
    let doc = Html::parse_fragment(html);
    let mut descriptor = ClassDescriptor::skeleton(class_name, SECTIONS);

    let mut images = specs::perk_tree::extract_into(&doc, &mut descriptor)?;
    images.extend(specs::prestige::extract_into(&doc, &mut descriptor)?);

    Ok((descriptor, images))
}
