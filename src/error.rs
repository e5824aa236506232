// src/error.rs
//! Error taxonomy for the scrape pipeline.
//!
//! Only [`ScrapeError::EmptyPage`] is ever recovered (it ends pagination).
//! Everything else aborts the day's scrape and nothing is stored.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No rank markers on the page. Pagination stop signal, not a failure.
    #[error("page contains no rank entries")]
    EmptyPage,

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("unknown event day: {label:?}")]
    UnknownDay { label: String },

    #[error("store error at {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn is_empty_page(&self) -> bool {
        matches!(self, ScrapeError::EmptyPage)
    }
}

/// Malformed or missing field inside one rank block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not an integer: {text:?}")]
    InvalidNumber { text: String },

    #[error("rank {rank:?} has no player name")]
    MissingName { rank: String },

    #[error("rank {rank:?} has no chip stack")]
    MissingChipCount { rank: String },
}

/// Network or transport failure. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },
}
