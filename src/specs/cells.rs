// src/specs/cells.rs
use scraper::ElementRef;

use crate::config::consts::RESOURCES_SUBDIR;
use crate::core::html::{image_data_src, text_content};
use crate::core::slug::{self, IdStyle};

/// An image the page references: where to fetch it and where it is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    /// Root-relative path, also the value written to the JSON `img` key.
    pub asset: String,
}

/// What the leading cell of a perk or prestige entry tells us.
#[derive(Debug, PartialEq, Eq)]
pub struct CellHead {
    pub name: String,
    pub id: Option<String>,
    pub image: Option<ImageRef>,
}

pub fn read_head(cell: ElementRef<'_>, class_name: &str, style: IdStyle) -> CellHead {
    let name = text_content(cell);

    let Some(src) = image_data_src(cell) else {
        return CellHead { name, id: None, image: None };
    };

    let filename = slug::image_filename(src);
    let image = ImageRef {
        url: s!(src),
        asset: slug::asset_ref(RESOURCES_SUBDIR, class_name, filename),
    };
    CellHead { name, id: Some(slug::derive_id(filename, style)), image: Some(image) }
}
