// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};
use url::Url;

use super::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

/// Compile a CSS selector, mapping the selector error into ours.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::parse("css selector", format!("{css}: {e}")))
}

/// Concatenated text of all descendant text nodes (like DOM `textContent`), untouched.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `text_content`, whitespace-collapsed and trimmed.
pub fn visible_text(el: ElementRef<'_>) -> String {
    normalize_ws(&text_content(el))
}

/// `href` of the first element matching `sel` under `el`, if any.
pub fn first_href<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<&'a str> {
    el.select(sel).next()?.value().attr("href")
}

/// Resolve a (possibly relative) href against the site base.
pub fn absolutize(base: &Url, href: &str) -> Result<String> {
    base.join(href)
        .map(String::from)
        .map_err(|e| ScrapeError::parse("link", format!("{href}: {e}")))
}
