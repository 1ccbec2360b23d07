// src/config/consts.rs

// Net config
pub const SITE_BASE: &str = "https://news.ycombinator.com/";
pub const LISTING_URL: &str = "https://news.ycombinator.com/submitted?id=whoishiring";
pub const USER_AGENT: &str = concat!("hiring_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Politeness: one request in flight, then pause after every network hit
pub const REQUEST_PAUSE_MS: u64 = 5_000;

// Pagination
pub const MAX_PAGES: usize = 9;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_ALL_MONTHS: &str = "output-all-months.json";
pub const FILE_LAST_TWO: &str = "output-last-two-months.json";
pub const FILE_ALL_COMPANIES: &str = "output-all-companies.json";
