// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
}

/// Fixed account / grid / tournament identifiers sent with every page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteIds {
    pub aid: u32,
    pub grid: u32,
    pub tid: u32,
}

impl Default for SiteIds {
    fn default() -> Self {
        Self {
            aid: SITE_AID,
            grid: SITE_GRID,
            tid: SITE_TID,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub day: String,
    pub base_url: String,
    pub page_size: u32,
    pub site: SiteIds,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY.to_string(),
            base_url: BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            site: SiteIds::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreTarget {
    LocalJson,
    Stdout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub target: StoreTarget,
    pub out_dir: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            target: StoreTarget::LocalJson,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
