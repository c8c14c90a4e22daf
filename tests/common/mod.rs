// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use sm2_scrape::ScrapeError;
use sm2_scrape::core::Fetch;
use sm2_scrape::specs::wiki::page_url;

pub const API: &str = "https://wiki.test/api.php";

/// Smallest prefix `image::guess_format` recognises as PNG.
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

pub const ASSAULT_HTML: &str = include_str!("../fixtures/assault_page.html");
pub const ASSAULT_JSON: &str = include_str!("../fixtures/assault.json");

pub const ASSAULT_IMAGES: &[&str] = &[
    "https://static.wikia.nocookie.net/spacemarine2/images/a/ab/PerkAssault_Charge.png/revision/latest?cb=20240910",
    "https://static.wikia.nocookie.net/spacemarine2/images/c/cd/Perk_Quick_Hands.png/revision/latest?cb=20240911",
    "https://static.wikia.nocookie.net/spacemarine2/images/1/12/Prestige_perk_Veteran_Tactics.png/revision/latest?cb=20240912",
];

/// In-memory `Fetch` that records every URL it was asked for.
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    /// Serve `html` as the parse envelope for `page`.
    pub fn with_page(self, page: &str, html: &str) -> Self {
        let envelope = serde_json::json!({ "parse": { "title": page, "pageid": 1, "text": html } });
        self.with(&page_url(API, page), envelope.to_string())
    }

    /// The Assault fixture page plus every image it references.
    pub fn assault() -> Self {
        ASSAULT_IMAGES
            .iter()
            .fold(Self::default().with_page("Assault", ASSAULT_HTML), |f, url| f.with(url, PNG))
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| *u == url).count()
    }

    fn lookup(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.calls.borrow_mut().push(url.to_string());
        self.bodies.get(url).cloned().ok_or_else(|| ScrapeError::Body {
            url: url.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no fixture for url"),
        })
    }
}

impl Fetch for FakeFetcher {
    fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let bytes = self.lookup(url)?;
        String::from_utf8(bytes).map_err(|e| ScrapeError::Body {
            url: url.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.lookup(url)
    }
}
