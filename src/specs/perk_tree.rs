// src/specs/perk_tree.rs
//! Scraping *spec* for the perk tree table.
//!
//! Layout on the class page:
//! ```text
//! <table class="... perktree-table">
//!   <tr><th colspan=3>Core</th><th>Team</th><th colspan=3>Gear</th><th>Signature</th></tr>
//!   <tr><td>perk</td><td>perk</td>...</tr>      one perk per cell, left to right
//! ```
//! Header colspans expand to keys (`core-col-1`..`core-col-3`, `team-col-1`, ...)
//! and each data cell lands in the column whose key sits at the same position.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::cells::{self, ImageRef};
use crate::config::consts::{MAX_COLSPAN, PERK_TREE_CLASS};
use crate::core::html::{self, TD, TH, TR};
use crate::core::slug::{self, IdStyle};
use crate::error::{Result, ScrapeError};
use crate::model::{ClassDescriptor, Perk};

/// A header cell before colspan expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub span: usize,
}

/// First table on the page whose class mentions `perktree-table`.
pub fn locate(doc: &Html) -> Result<ElementRef<'_>> {
    html::tables_with_class(doc, PERK_TREE_CLASS)
        .into_iter()
        .next()
        .ok_or(ScrapeError::MissingTable { class: PERK_TREE_CLASS })
}

/// Read `<th>` cells of the header row. A missing colspan counts as 1;
/// anything unparsable or above [`MAX_COLSPAN`] is rejected.
pub fn read_header(row: ElementRef<'_>) -> Result<Vec<HeaderCell>> {
    row.select(&TH)
        .map(|th| -> Result<HeaderCell> {
            let label = html::text_content(th);
            let span = match th.value().attr("colspan") {
                None => 1,
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n <= MAX_COLSPAN)
                    .ok_or_else(|| ScrapeError::BadColspan { label: label.clone(), raw: s!(raw) })?,
            };
            Ok(HeaderCell { label, span })
        })
        .collect()
}

/// `Combat` spanning 3 → `combat-col-1`, `combat-col-2`, `combat-col-3`.
pub fn map_headers(cells: &[HeaderCell]) -> Vec<String> {
    cells
        .iter()
        .flat_map(|cell| {
            let label = cell.label.to_lowercase();
            (1..=cell.span).map(move |n| format!("{label}-col-{n}"))
        })
        .collect()
}

/// Build a perk from one tree cell.
///
/// Every tree cell wraps its icon in an element carrying the tooltip as `title`;
/// a cell without one is malformed markup and rejected.
fn read_perk(
    cell: ElementRef<'_>,
    class_name: &str,
    row: usize,
    col: usize,
) -> Result<(Perk, Option<ImageRef>)> {
    let head = cells::read_head(cell, class_name, IdStyle::Perk);
    let title = html::first_title(cell).ok_or_else(|| ScrapeError::MissingTooltip {
        row,
        cell: col,
        name: head.name.clone(),
    })?;

    let perk = Perk {
        name: head.name,
        img: head.image.as_ref().map(|i| i.asset.clone()),
        id: head.id,
        desc: slug::tooltip_desc(title),
    };
    Ok((perk, head.image))
}

/// Walk the perk tree and append every perk to its column in `descriptor`.
/// Returns the images referenced, in page order.
pub fn extract_into(doc: &Html, descriptor: &mut ClassDescriptor) -> Result<Vec<ImageRef>> {
    let table = locate(doc)?;
    let mut rows = table.select(&TR);

    let header_row = rows.next().ok_or(ScrapeError::MissingHeader)?;
    let keys = map_headers(&read_header(header_row)?);
    debug!(columns = keys.len(), "perk tree header mapped");

    let class_name = descriptor.name.clone();
    let mut images = Vec::new();

    for (r, row) in rows.enumerate() {
        let row_no = r + 1;
        let tds: Vec<_> = row.select(&TD).collect();
        if tds.len() > keys.len() {
            return Err(ScrapeError::RowOverflow { row: row_no, cells: tds.len(), columns: keys.len() });
        }

        for (c, (td, key)) in tds.into_iter().zip(&keys).enumerate() {
            let col_no = c + 1;
            let (perk, image) = read_perk(td, &class_name, row_no, col_no)?;
            let column = descriptor.column_mut(key).ok_or_else(|| ScrapeError::UnknownColumn {
                row: row_no,
                cell: col_no,
                key: key.clone(),
            })?;
            column.perks.push(perk);
            images.extend(image);
        }
    }

    Ok(images)
}
