// src/core/net.rs

// Blocking HTTP GET behind a small trait so the pipeline can run offline in tests.

use std::io::Read;

use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String>;
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// `ureq` agent with transport-default timeouts.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Self { agent }
    }

    fn call(&self, url: &str) -> Result<ureq::Response> {
        debug!(url, "GET");
        self.agent.get(url).call().map_err(|e| ScrapeError::Http {
            url: s!(url),
            source: Box::new(e),
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        self.call(url)?
            .into_string()
            .map_err(|source| ScrapeError::Body { url: s!(url), source })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.call(url)?
            .into_reader()
            .read_to_end(&mut buf)
            .map_err(|source| ScrapeError::Body { url: s!(url), source })?;
        Ok(buf)
    }
}
