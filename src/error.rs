// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or non-success HTTP status.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Bad selector, bad URL. Document parsing itself is permissive and never fails.
    #[error("could not parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },

    #[error("no hiring thread found for month {0:?}")]
    NotFound(String),

    #[error("need at least {needed} hiring thread(s), found {found}")]
    NotEnoughThreads { needed: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Fetch { url: s!(url), reason: reason.to_string() }
    }

    pub fn parse(what: &'static str, detail: impl ToString) -> Self {
        ScrapeError::Parse { what, detail: detail.to_string() }
    }
}
