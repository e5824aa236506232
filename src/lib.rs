// src/lib.rs
//! Tournament chip-count scraper.
//!
//! ```text
//! cli → runner::collect_data → scrape::scrape_day → core::net (fetch page N)
//!                                                 ↘ pages::chipcounts::extract
//!                                                 ↘ PlayerMap::merge
//!                            → store::DataStore::store
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;
pub mod pages;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{Result, ScrapeError};
