// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

/// What the caller asks for. Mirrors the two knobs of the entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Write a JSON artifact (true) or print a table (false).
    pub save_as_file: bool,
    pub which_months: WhichMonths,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            save_as_file: true,
            which_months: WhichMonths::LastTwo,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhichMonths {
    /// Diff the newest thread against the one before it.
    #[default]
    LastTwo,
    /// Diff every adjacent pair of threads.
    All,
    /// Track every company of the newest thread across all months.
    Companies,
}

impl WhichMonths {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhichMonths::LastTwo => "last-two",
            WhichMonths::All => "all",
            WhichMonths::Companies => "companies",
        }
    }
}

impl FromStr for WhichMonths {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-two" => Ok(WhichMonths::LastTwo),
            "all" => Ok(WhichMonths::All),
            "companies" => Ok(WhichMonths::Companies),
            other => Err(format!("Unknown months selection: {other} (expected last-two, all or companies)")),
        }
    }
}

/// Run context: where to scrape, how politely, where to write.
/// Passed explicitly into the pipeline; nothing here is global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub listing_url: String,
    pub site_base: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub request_pause: Duration,
    pub max_pages: usize,
    pub out_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listing_url: s!(LISTING_URL),
            site_base: s!(SITE_BASE),
            user_agent: s!(USER_AGENT),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            max_pages: MAX_PAGES,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
