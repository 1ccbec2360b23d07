// src/specs/thread.rs
//! Scraping *spec* for one page of a hiring thread.
//!
//! Qualifying post: a `tr.athing.comtr` row whose indent cell says
//! `indent="0"` (a direct reply to the thread) and which has a `.commtext`
//! body. Deleted/flagged comments have no body and don't count.
//!
//! Company name: text before the first `|`, trimmed, then cut before the
//! first `(...)` remark or bare URL. The cut is not anchored to the end, so a
//! remark in the middle of the name drops everything after it as well:
//!
//! ```text
//! "Acme Corp (Remote) http://acme.com | SWE | ..."  →  "Acme Corp"
//! "Acme Corp | Remote | http://acme.com"            →  "Acme Corp"
//! "Foo (Bar) Baz Inc | Remote"                      →  "Foo"
//! "We're hiring engineers, see site"                →  (skipped, no pipe)
//! ```

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::CommentPage;
use crate::core::html::{absolutize, first_href, selector, text_content};
use crate::core::sanitize::normalize_ws;
use crate::data::Company;
use crate::error::Result;

static NAME_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^|]+)\|").expect("name segment pattern"));

static NAME_CLEANUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*(?:\([^)]*\)|https?://\S+)").expect("name cleanup pattern")
});

struct Selectors {
    row: Selector,
    top_level: Selector,
    body: Selector,
    permalink: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector("tr.athing.comtr")?,
            top_level: selector(r#"td.ind[indent="0"]"#)?,
            body: selector(".commtext:first-child")?,
            permalink: selector("span.age a")?,
        })
    }
}

/// Company name from a post's full text, or None when the post doesn't
/// follow the `Name | ...` convention.
pub fn company_name(post_text: &str) -> Option<String> {
    let segment = NAME_SEGMENT.captures(post_text.trim())?.get(1)?.as_str();
    let name = clean_name(&normalize_ws(segment));
    (!name.is_empty()).then_some(name)
}

/// Cut an already-trimmed name before its first `(...)` remark or bare URL.
pub fn clean_name(name: &str) -> String {
    match NAME_CLEANUP.captures(name).and_then(|c| c.get(1)) {
        Some(m) => s!(m.as_str().trim()),
        None => s!(name.trim()),
    }
}

pub fn parse_comments(doc: &Html, base: &Url, page_url: &str) -> Result<CommentPage> {
    let sel = Selectors::new()?;
    let mut page = CommentPage::default();

    for row in doc.select(&sel.row) {
        let Some(body) = top_level_body(row, &sel) else {
            continue;
        };
        page.posts += 1;

        let Some(name) = company_name(&text_content(body)) else {
            logd!("skipping non-conforming post on {page_url}");
            continue;
        };

        let link = match first_href(row, &sel.permalink) {
            Some(href) => absolutize(base, href).unwrap_or_else(|_| s!(page_url)),
            None => s!(page_url),
        };
        page.companies.push(Company { name, link });
    }

    Ok(page)
}

fn top_level_body<'a>(row: ElementRef<'a>, sel: &Selectors) -> Option<ElementRef<'a>> {
    row.select(&sel.top_level).next()?;
    row.select(&sel.body).next()
}
