// src/specs/listing.rs
//! Scraping *spec* for the submissions listing.
//!
//! Each story title is `span.titleline > a`. A title is a hiring thread when
//! it contains the word `hiring` followed, somewhere later, by a parenthesized
//! month: `Ask HN: Who is hiring? (March 2024)`. Everything else the account
//! posts ("Who wants to be hired?", "Freelancer?") is skipped.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::core::html::{absolutize, selector, visible_text};
use crate::data::Thread;
use crate::error::Result;

static HIRING_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hiring.*\((\w+)").expect("hiring title pattern"));

/// Month token of a hiring-thread title, or None for any other title.
pub fn hiring_month(title: &str) -> Option<&str> {
    HIRING_TITLE
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Hiring threads in page order (newest first on the live site).
pub fn parse_listing(doc: &Html, base: &Url) -> Result<Vec<Thread>> {
    let titles = selector("span.titleline > a")?;
    let mut threads = Vec::new();

    for a in doc.select(&titles) {
        let title = visible_text(a);
        let Some(month) = hiring_month(&title) else {
            continue;
        };
        let Some(href) = a.value().attr("href") else {
            logd!("hiring title without href: {title}");
            continue;
        };
        threads.push(Thread { month: s!(month), link: absolutize(base, href)? });
    }

    Ok(threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_comes_from_the_parenthesized_token() {
        assert_eq!(hiring_month("Ask HN: Who is hiring? (March 2024)"), Some("March"));
        assert_eq!(hiring_month("Ask HN: Who is hiring? (April 2024)"), Some("April"));
    }

    #[test]
    fn other_threads_are_not_hiring_threads() {
        assert_eq!(hiring_month("Ask HN: Who wants to be hired? (March 2024)"), None);
        assert_eq!(hiring_month("Ask HN: Freelancer? Seeking freelancer? (March 2024)"), None);
        assert_eq!(hiring_month("Ask HN: Who is hiring?"), None);
    }
}
