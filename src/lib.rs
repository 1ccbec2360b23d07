// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod data;
pub mod specs;

pub mod diff;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod track;

pub use error::{Result, ScrapeError};
pub use data::{Company, Thread};
