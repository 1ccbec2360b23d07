// src/core/fetch.rs
//! Cached, paced document fetching.
//!
//! A `Fetcher` lives for exactly one run. The cache only ever grows: the first
//! fetch of a URL goes to the network and is followed by the politeness pause,
//! whether or not it succeeded; every later fetch of a cached URL is served
//! from memory with no pause.
//! Only raw bodies are cached; each call parses a fresh `Html`.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use scraper::Html;

use super::net::Transport;
use crate::error::Result;

pub struct Fetcher {
    transport: Box<dyn Transport>,
    pause: Duration,
    cache: HashMap<String, String>,
    network_requests: usize,
}

impl Fetcher {
    pub fn new(transport: Box<dyn Transport>, pause: Duration) -> Self {
        Self {
            transport,
            pause,
            cache: HashMap::new(),
            network_requests: 0,
        }
    }

    /// Fetch and parse `url`.
    pub fn fetch(&mut self, url: &str) -> Result<Html> {
        let body = self.fetch_raw(url)?;
        Ok(Html::parse_document(body))
    }

    /// Raw body for `url`, from cache when possible.
    pub fn fetch_raw(&mut self, url: &str) -> Result<&str> {
        if !self.cache.contains_key(url) {
            logd!("GET {url}");
            let fetched = self.transport.get(url);

            // pause on failures too
            if !self.pause.is_zero() {
                thread::sleep(self.pause); // be polite
            }

            self.cache.insert(s!(url), fetched?);
            self.network_requests += 1;
        } else {
            logd!("cache hit {url}");
        }
        // present: inserted above on a miss
        Ok(self.cache.get(url).map(String::as_str).unwrap_or_default())
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.cache.contains_key(url)
    }

    /// How many fetches were answered by the transport and cached.
    pub fn network_requests(&self) -> usize {
        self.network_requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Instant;

    const PAUSE: Duration = Duration::from_millis(150);

    struct Counting {
        hits: Rc<Cell<usize>>,
    }

    impl Transport for Counting {
        fn get(&self, url: &str) -> Result<String> {
            self.hits.set(self.hits.get() + 1);
            if url.ends_with("/down") {
                return Err(ScrapeError::fetch(url, "HTTP 503 Service Unavailable"));
            }
            Ok(format!("<html><body><p id=\"u\">{url}</p></body></html>"))
        }
    }

    fn fetcher() -> (Fetcher, Rc<Cell<usize>>) {
        paced(Duration::ZERO)
    }

    fn paced(pause: Duration) -> (Fetcher, Rc<Cell<usize>>) {
        let hits = Rc::new(Cell::new(0));
        let f = Fetcher::new(Box::new(Counting { hits: Rc::clone(&hits) }), pause);
        (f, hits)
    }

    #[test]
    fn second_fetch_is_served_from_cache() {
        let (mut f, hits) = fetcher();
        let first = s!(f.fetch_raw("https://x.test/a").unwrap());
        let second = s!(f.fetch_raw("https://x.test/a").unwrap());

        assert_eq!(first, second);
        assert_eq!(hits.get(), 1);
        assert_eq!(f.network_requests(), 1);
    }

    #[test]
    fn distinct_urls_are_distinct_entries() {
        let (mut f, hits) = fetcher();
        f.fetch("https://x.test/a").unwrap();
        f.fetch("https://x.test/a&p=2").unwrap();
        assert_eq!(hits.get(), 2);
        assert!(f.is_cached("https://x.test/a&p=2"));
    }

    #[test]
    fn failures_are_not_cached() {
        let (mut f, hits) = fetcher();
        assert!(matches!(f.fetch("https://x.test/down"), Err(ScrapeError::Fetch { .. })));
        assert!(f.fetch("https://x.test/down").is_err());
        assert_eq!(hits.get(), 2);
        assert_eq!(f.network_requests(), 0);
        assert!(!f.is_cached("https://x.test/down"));
    }

    #[test]
    fn repeated_fetch_pauses_once() {
        let (mut f, hits) = paced(PAUSE);
        let start = Instant::now();
        f.fetch("https://x.test/a").unwrap();
        f.fetch("https://x.test/a").unwrap();
        let took = start.elapsed();

        assert_eq!(hits.get(), 1);
        assert!(took >= PAUSE, "no pause on the miss: {took:?}");
        assert!(took < PAUSE * 2, "paused on the cache hit too: {took:?}");
    }

    #[test]
    fn failed_request_still_pauses() {
        let (mut f, _) = paced(PAUSE);
        let start = Instant::now();
        assert!(f.fetch("https://x.test/down").is_err());
        let took = start.elapsed();

        assert!(took >= PAUSE, "no pause after a failed request: {took:?}");
        assert_eq!(f.network_requests(), 0);
    }
}
