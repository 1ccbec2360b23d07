// src/core/mod.rs

pub mod fetch;
pub mod html;
pub mod net;
pub mod sanitize;

pub use fetch::Fetcher;
pub use net::{HttpTransport, Transport};
