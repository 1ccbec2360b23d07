// src/scrape/mod.rs
mod companies;
mod pages;
mod threads;

pub use companies::{companies_for_thread, extract_companies};
pub use pages::{list_pages, Pagination, StopReason};
pub use threads::{list_threads, thread_url_for_month};
