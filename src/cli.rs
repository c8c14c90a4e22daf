// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::config::consts::{CLASSES, DEFAULT_ROOT, WIKI_API};
use crate::config::options::{AppOptions, ClassSelector, ExportOptions, ScrapeOptions};
use crate::core::HttpFetcher;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::ScrapeError;

/// Scrape Space Marine 2 class perk trees from the wiki into JSON.
#[derive(Parser, Debug)]
#[command(name = "sm2_scrape", version, about)]
pub struct Args {
    /// Class page to scrape (repeatable). Defaults to every class.
    #[arg(short, long = "class", value_name = "NAME")]
    pub classes: Vec<String>,

    /// Output root; JSON goes to <OUT>/data, images to <OUT>/resources.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub out: PathBuf,

    /// MediaWiki API endpoint.
    #[arg(long, value_name = "URL", default_value = WIKI_API)]
    pub api: String,

    /// Continue with the remaining classes when one fails.
    #[arg(long)]
    pub keep_going: bool,

    /// Print the known class names and exit.
    #[arg(long)]
    pub list_classes: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let classes = if self.classes.is_empty() {
            ClassSelector::All
        } else {
            ClassSelector::Only(self.classes.clone())
        };
        AppOptions {
            scrape: ScrapeOptions {
                classes,
                api_url: self.api.clone(),
                keep_going: self.keep_going,
            },
            export: ExportOptions { root: self.out.clone() },
        }
    }
}

/// Prints one line per finished class.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, _class: &str, path: &Path) {
        println!("Wrote {}", path.display());
    }

    fn item_failed(&mut self, class: &str, err: &ScrapeError) {
        eprintln!("Failed {class}: {}", err.chain());
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} of {total} classes failed: {}", .failed.len(), .failed.join(", "))]
pub struct PartialFailure {
    pub failed: Vec<String>,
    pub total: usize,
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref())?;

    if args.list_classes {
        for name in CLASSES {
            println!("{name}");
        }
        return Ok(());
    }

    let opts = args.to_options();
    let fetcher = HttpFetcher::new();
    let mut progress = CliProgress;
    let summary = runner::run(&opts, &fetcher, Some(&mut progress as &mut dyn Progress))?;
    report(summary)
}

fn report(summary: RunSummary) -> color_eyre::Result<()> {
    tracing::info!(
        files = summary.files_written.len(),
        downloaded = summary.images_downloaded,
        cached = summary.images_cached,
        bytes = summary.bytes_downloaded,
        "done"
    );
    if summary.failed.is_empty() {
        return Ok(());
    }
    let total = summary.files_written.len() + summary.failed.len();
    let failed = summary.failed.into_iter().map(|(class, _)| class).collect();
    Err(PartialFailure { failed, total }.into())
}
