// src/core/net.rs
//! Blocking page fetches. One GET per call, no retries.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::config::options::{ScrapeOptions, SiteIds};
use crate::error::{FetchError, Result};

/// Where pages come from. The pagination driver only talks to this.
pub trait PageSource {
    /// Raw markup for `page` (1-based) of the given site day.
    fn fetch(&self, day_id: u32, page: u32) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, day_id: u32, page: u32) -> Result<String> {
        (**self).fetch(day_id, page)
    }
}

/// `{base}/?aid=..&grid=..&tid=..&dayof=<day>&rr=<size>&curpage=<page>`
pub fn page_url(base: &str, site: SiteIds, day_id: u32, page_size: u32, page: u32) -> String {
    format!(
        "{}/?aid={}&grid={}&tid={}&dayof={}&rr={}&curpage={}",
        base.trim_end_matches('/'),
        site.aid,
        site.grid,
        site.tid,
        day_id,
        page_size,
        page
    )
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
    site: SiteIds,
    page_size: u32,
}

impl HttpFetcher {
    pub fn new(options: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Http { url: options.base_url.clone(), source })?;

        Ok(Self {
            client,
            base_url: options.base_url.clone(),
            site: options.site,
            page_size: options.page_size,
        })
    }

    pub fn url_for(&self, day_id: u32, page: u32) -> String {
        page_url(&self.base_url, self.site, day_id, self.page_size, page)
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, day_id: u32, page: u32) -> Result<String> {
        let url = self.url_for(day_id, page);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status }.into());
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Http { url: url.clone(), source })?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody { url }.into());
        }

        debug!(%url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
