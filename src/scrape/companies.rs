// src/scrape/companies.rs

use crate::core::Fetcher;
use crate::data::Company;
use crate::error::Result;
use crate::specs::SiteAdapter;

use super::pages::list_pages;

/// Companies posted on one thread page, in page order.
pub fn extract_companies(
    fetcher: &mut Fetcher,
    site: &dyn SiteAdapter,
    page_url: &str,
) -> Result<Vec<Company>> {
    let doc = fetcher.fetch(page_url)?;
    let page = site.parse_comment_page(&doc, page_url)?;

    logd!(
        "{page_url}: {} post(s), {} company record(s)",
        page.posts,
        page.companies.len()
    );
    Ok(page.companies)
}

/// All companies of a thread: walk its pages, then extract each one.
/// Pages were fetched while walking, so extraction is served from cache.
pub fn companies_for_thread(
    fetcher: &mut Fetcher,
    site: &dyn SiteAdapter,
    thread_url: &str,
    max_pages: usize,
) -> Result<Vec<Company>> {
    let pagination = list_pages(fetcher, site, thread_url, max_pages);

    let mut companies = Vec::new();
    for page_url in &pagination.pages {
        companies.extend(extract_companies(fetcher, site, page_url)?);
    }

    logf!(
        "{thread_url}: {} companies over {} page(s)",
        companies.len(),
        pagination.pages.len()
    );
    Ok(companies)
}
