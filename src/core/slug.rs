// src/core/slug.rs
//! Identifier and description parsing for wiki perk cells.
//!
//! Image URLs look like
//! `https://static.wikia.nocookie.net/.../PerkAssault_Charge.png/revision/latest?cb=...`.
//! The filename (`PerkAssault_Charge.png`) names the local copy and, once its
//! prefix token is dropped and underscores become hyphens, the perk id
//! (`Assault-Charge`).

use std::sync::LazyLock;

use regex::Regex;

static PERK_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Perk_*").expect("static regex"));
static PRESTIGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Prestige_perk_").expect("static regex"));

/// Tooltip paragraphs are separated by a blank line; the first one is the effect text.
const TOOLTIP_SEP: &str = "\n\n";

/// Which prefix token to strip when turning an image filename into an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStyle {
    Perk,
    Prestige,
}

impl IdStyle {
    fn token(self) -> &'static Regex {
        match self {
            IdStyle::Perk => &PERK_TOKEN,
            IdStyle::Prestige => &PRESTIGE_TOKEN,
        }
    }
}

/// Bare filename of an image URL: cut at `/revision`, keep what follows the last `/`.
pub fn image_filename(src: &str) -> &str {
    let base = src.find("/revision").map_or(src, |i| &src[..i]);
    base.rsplit('/').next().unwrap_or(base)
}

/// Root-relative path the image is stored under and referenced by.
pub fn asset_ref(resources_dir: &str, class_name: &str, filename: &str) -> String {
    format!("{resources_dir}/{class_name}/{filename}")
}

/// Stable id from an image filename, e.g. `Perk_Quick_Hands.png` → `Quick-Hands`.
///
/// Every occurrence of the prefix token is removed, not only a leading one.
pub fn derive_id(filename: &str, style: IdStyle) -> String {
    let stripped = style.token().replace_all(filename, "");
    let hyphenated = stripped.replace('_', "-");
    match hyphenated.strip_suffix(".png") {
        Some(stem) => s!(stem),
        None => hyphenated,
    }
}

/// First paragraph of a tooltip, if the tooltip has more than one.
pub fn tooltip_desc(title: &str) -> Option<String> {
    let mut parts = title.split(TOOLTIP_SEP);
    let first = parts.next()?;
    parts.next().map(|_| s!(first.trim()))
}

/// Rank counters in the prestige list are bare numbers.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}
