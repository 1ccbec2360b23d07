// src/scrape/threads.rs

use crate::core::Fetcher;
use crate::data::Thread;
use crate::error::{Result, ScrapeError};
use crate::specs::SiteAdapter;

/// Every hiring thread on the listing page, in page order.
/// A failed listing fetch is fatal: nothing can be compared without it.
pub fn list_threads(fetcher: &mut Fetcher, site: &dyn SiteAdapter) -> Result<Vec<Thread>> {
    let doc = fetcher.fetch(site.listing_url())?;
    let threads = site.parse_thread_listing(&doc)?;

    logf!(
        "found {} hiring thread(s): {}",
        threads.len(),
        threads.iter().map(|t| t.month.as_str()).collect::<Vec<_>>().join(", ")
    );
    Ok(threads)
}

/// Link of the first thread labelled `month`.
pub fn thread_url_for_month<'a>(threads: &'a [Thread], month: &str) -> Result<&'a str> {
    threads
        .iter()
        .find(|t| t.month == month)
        .map(|t| t.link.as_str())
        .ok_or_else(|| ScrapeError::NotFound(s!(month)))
}
