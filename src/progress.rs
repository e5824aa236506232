// src/progress.rs
/// Lightweight progress reporting for a day's scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first page is fetched.
    fn begin(&mut self, _day: &str, _day_id: u32) {}

    /// Called after a page's records have all been merged.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// Called when pagination stops normally.
    fn finish(&mut self, _pages: u32, _players: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
