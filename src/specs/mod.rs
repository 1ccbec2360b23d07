// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications for the forum. Each spec covers one
//! page type and encodes *where the ground truth lives in the HTML* and *how
//! to read it*.
//!
//! ## What lives here
//! - **Every selector and text pattern** the pipeline depends on. When the
//!   site's markup changes, this module is the one place to update.
//! - `listing`: the submissions listing → hiring `Thread`s.
//! - `thread`: one page of a thread → count of top-level posts + `Company`s.
//! - `SiteAdapter`: the seam the pipeline talks to; `HackerNews` is the
//!   live implementation.
//!
//! ## What does **not** live here
//! - **Fetching, caching, pacing** (`core::fetch`).
//! - **Walking pages, diffing, tracking** (`scrape`, `diff`, `track`).
//! - **Output** (`report`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::threads / pages / companies → Fetcher::fetch(url)
//!                                             ↘ SiteAdapter::parse_*(doc)
//! ```
//!
//! ## Conventions & invariants
//! - Parsing is permissive: a malformed post is skipped, never an error.
//! - Links come back absolute, resolved against the site base.
//! - Specs are testable **offline** against saved HTML.

pub mod listing;
pub mod thread;

use scraper::Html;
use url::Url;

use crate::config::options::Settings;
use crate::data::{Company, Thread};
use crate::error::{Result, ScrapeError};

/// What one thread page yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentPage {
    /// Qualifying top-level posts on the page, conforming or not.
    /// Zero means the thread has no more pages.
    pub posts: usize,
    /// Records from the conforming posts, in page order.
    pub companies: Vec<Company>,
}

pub trait SiteAdapter {
    /// Where the hiring threads are listed.
    fn listing_url(&self) -> &str;

    /// URL of page `page` (1-based) of a thread.
    fn page_url(&self, thread_url: &str, page: usize) -> String;

    fn parse_thread_listing(&self, doc: &Html) -> Result<Vec<Thread>>;

    fn parse_comment_page(&self, doc: &Html, page_url: &str) -> Result<CommentPage>;
}

/// Hacker News markup (`whoishiring` submissions, `item?id=` threads).
#[derive(Clone, Debug)]
pub struct HackerNews {
    listing_url: String,
    base: Url,
}

impl HackerNews {
    pub fn new(settings: &Settings) -> Result<Self> {
        let base = Url::parse(&settings.site_base)
            .map_err(|e| ScrapeError::parse("site base url", format!("{}: {e}", settings.site_base)))?;
        Ok(Self { listing_url: settings.listing_url.clone(), base })
    }
}

impl SiteAdapter for HackerNews {
    fn listing_url(&self) -> &str {
        &self.listing_url
    }

    fn page_url(&self, thread_url: &str, page: usize) -> String {
        join!(thread_url, "&p=", &page.to_string())
    }

    fn parse_thread_listing(&self, doc: &Html) -> Result<Vec<Thread>> {
        listing::parse_listing(doc, &self.base)
    }

    fn parse_comment_page(&self, doc: &Html, page_url: &str) -> Result<CommentPage> {
        thread::parse_comments(doc, &self.base, page_url)
    }
}
