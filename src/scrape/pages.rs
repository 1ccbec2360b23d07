// src/scrape/pages.rs

use crate::config::consts::MAX_PAGES;
use crate::core::Fetcher;
use crate::specs::SiteAdapter;

/// Why the walk stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// First page with no top-level posts; the normal end of a thread.
    EmptyPage(usize),
    /// Fetching or parsing this page failed. Treated like an empty page, but
    /// kept so callers can tell a broken page from a genuinely short thread.
    PageFailed { page: usize, reason: String },
    /// Probed every page up to the limit without hitting an empty one.
    PageLimit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Page URLs with at least one top-level post, in order, no gaps.
    pub pages: Vec<String>,
    pub stop: StopReason,
}

impl Pagination {
    pub fn truncated_by_error(&self) -> bool {
        matches!(self.stop, StopReason::PageFailed { .. })
    }
}

/// Probe `thread_url&p=1`, `&p=2`, … until a page has no top-level posts.
/// Never probes more than `max_pages` (capped at 9) pages.
pub fn list_pages(
    fetcher: &mut Fetcher,
    site: &dyn SiteAdapter,
    thread_url: &str,
    max_pages: usize,
) -> Pagination {
    let limit = max_pages.min(MAX_PAGES);
    let mut pages = Vec::new();

    for n in 1..=limit {
        let url = site.page_url(thread_url, n);

        let posts = match fetcher
            .fetch(&url)
            .and_then(|doc| site.parse_comment_page(&doc, &url))
        {
            Ok(page) => page.posts,
            Err(e) => {
                logw!("pagination for {thread_url} stopped at page {n}: {e}");
                return Pagination {
                    pages,
                    stop: StopReason::PageFailed { page: n, reason: e.to_string() },
                };
            }
        };

        if posts == 0 {
            logd!("{thread_url}: page {n} is empty, {} page(s) total", pages.len());
            return Pagination { pages, stop: StopReason::EmptyPage(n) };
        }
        pages.push(url);
    }

    logd!("{thread_url}: hit the {limit}-page limit");
    Pagination { pages, stop: StopReason::PageLimit }
}
