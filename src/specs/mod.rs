// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge about the wiki's class pages: where the data sits in
//! the rendered HTML and how to lift it into [`crate::model`] types.
//!
//! ## What lives here
//! - **API envelope handling** (`wiki`): query URL and `parse.text` extraction.
//! - **Table parsing** (`perk_tree`, `prestige`): locate the tables, expand
//!   header colspans into column keys, walk rows and cells.
//! - **Cell reading** (`cells`): visible name, lazy-loaded image, derived id.
//!
//! ## What does **not** live here
//! - Downloading images or writing JSON. Extractors only *report* which images a
//!   page references ([`cells::ImageRef`]); the runner materializes them.
//!
//! ## Typical call chain
//! ```text
//! runner::build_class → specs::wiki::fetch_page
//!                     → specs::perk_tree::extract_into
//!                     → specs::prestige::extract_into
//!                     → assets::materialize (per ImageRef)
//! ```
//!
//! ## Conventions & invariants
//! - Rows and cells in errors are numbered from 1, header row excluded.
//! - Positional routing: the N-th cell of a data row goes to the N-th header key.
//! - Specs are testable **offline** against literal HTML.
pub mod cells;
pub mod perk_tree;
pub mod prestige;
pub mod wiki;

pub use cells::ImageRef;
