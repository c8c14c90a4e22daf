// src/core/html.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

pub static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
pub static TH: LazyLock<Selector> = LazyLock::new(|| sel("th"));
pub static TD: LazyLock<Selector> = LazyLock::new(|| sel("td"));
static IMG_DATA_SRC: LazyLock<Selector> = LazyLock::new(|| sel("img[data-src]"));
static TITLED: LazyLock<Selector> = LazyLock::new(|| sel("[title]"));

/// All `<table>` elements whose class attribute contains `class` as a substring.
pub fn tables_with_class<'a>(doc: &'a Html, class: &str) -> Vec<ElementRef<'a>> {
    // Substring match on purpose: the wiki mixes in "wikitable" and friends.
    let selector = sel(&format!(r#"table[class*="{class}"]"#));
    doc.select(&selector).collect()
}

/// Concatenated descendant text, trimmed.
pub fn text_content(el: ElementRef<'_>) -> String {
    let text: String = el.text().collect();
    s!(text.trim())
}

/// Lazy-loaded image URL (`data-src`) of the first descendant image that has one.
pub fn image_data_src<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.select(&IMG_DATA_SRC).next().and_then(|img| img.value().attr("data-src"))
}

/// `title` of the first descendant carrying one.
pub fn first_title<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.select(&TITLED).next().and_then(|e| e.value().attr("title"))
}
