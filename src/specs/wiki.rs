// src/specs/wiki.rs
//! MediaWiki `action=parse` access: one page name in, rendered HTML out.

use serde::Deserialize;
use tracing::debug;

use crate::core::Fetch;
use crate::error::{Result, ScrapeError};

#[derive(Deserialize)]
struct Envelope {
    parse: Option<Parsed>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Parsed {
    text: String,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

/// `formatversion=2` makes `parse.text` a plain string instead of `{"*": ...}`.
pub fn page_url(api_url: &str, page: &str) -> String {
    format!(
        "{api_url}?action=parse&format=json&page={}&formatversion=2",
        urlencoding::encode(page)
    )
}

/// Fetch the rendered HTML fragment for `page`.
pub fn fetch_page(fetcher: &dyn Fetch, api_url: &str, page: &str) -> Result<String> {
    let url = page_url(api_url, page);
    let body = fetcher.get_text(&url)?;
    let html = parse_envelope(page, &body)?;
    debug!(page, bytes = html.len(), "page fetched");
    Ok(html)
}

fn parse_envelope(page: &str, body: &str) -> Result<String> {
    let env: Envelope = serde_json::from_str(body)
        .map_err(|source| ScrapeError::Envelope { page: s!(page), source })?;

    match (env.parse, env.error) {
        (Some(parsed), _) => Ok(parsed.text),
        (None, Some(err)) => Err(ScrapeError::Api { page: s!(page), code: err.code, info: err.info }),
        (None, None) => Err(ScrapeError::Api {
            page: s!(page),
            code: s!("noparse"),
            info: s!("response carried neither `parse` nor `error`"),
        }),
    }
}
