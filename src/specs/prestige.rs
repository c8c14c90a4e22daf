// src/specs/prestige.rs
//! Scraping *spec* for the prestige perk list.
//!
//! The page carries several `perklist-table`s; the prestige list is the second.
//! Rows read `<rank> | <icon + name> | <effect>`. The rank counter is dropped.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::cells::{self, ImageRef};
use crate::config::consts::{PERK_LIST_CLASS, PRESTIGE_TABLE_INDEX};
use crate::core::html::{self, TD, TR};
use crate::core::slug::{self, IdStyle};
use crate::error::{Result, ScrapeError};
use crate::model::{ClassDescriptor, PrestigePerk};

pub fn locate(doc: &Html) -> Result<ElementRef<'_>> {
    let tables = html::tables_with_class(doc, PERK_LIST_CLASS);
    let found = tables.len();
    tables.into_iter().nth(PRESTIGE_TABLE_INDEX).ok_or(ScrapeError::MissingNthTable {
        class: PERK_LIST_CLASS,
        wanted: PRESTIGE_TABLE_INDEX + 1,
        found,
    })
}

fn read_row(row: ElementRef<'_>, class_name: &str) -> (PrestigePerk, Option<ImageRef>) {
    let mut perk = PrestigePerk::default();
    let mut image = None;
    let mut seen_head = false;

    for td in row.select(&TD) {
        let text = html::text_content(td);
        if slug::is_numeric(&text) {
            continue;
        }
        if !seen_head {
            seen_head = true;
            let head = cells::read_head(td, class_name, IdStyle::Prestige);
            perk.name = Some(head.name);
            perk.img = head.image.as_ref().map(|i| i.asset.clone());
            perk.id = head.id;
            image = head.image;
        } else {
            // Any later cell is the effect text; the last one wins.
            perk.desc = Some(text);
        }
    }

    (perk, image)
}

/// Append every prestige row to `descriptor.prestige`; returns referenced images.
pub fn extract_into(doc: &Html, descriptor: &mut ClassDescriptor) -> Result<Vec<ImageRef>> {
    let table = locate(doc)?;
    let class_name = descriptor.name.clone();
    let mut images = Vec::new();

    for row in table.select(&TR).skip(1) {
        let (perk, image) = read_row(row, &class_name);
        descriptor.prestige.push(perk);
        images.extend(image);
    }

    debug!(rows = descriptor.prestige.len(), "prestige list read");
    Ok(images)
}
