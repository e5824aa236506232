// src/pages/mod.rs
//! # Page readers
//!
//! One module per remote page. Each knows *where the data lives in the
//! markup* and turns a fetched document into domain records.
//!
//! Not handled here: fetching (`core::net`), pagination and merging
//! (`scrape`), persistence (`store`).
//!
//! Readers are pure functions of the markup so they can be tested offline
//! against inline fixtures.

pub mod chipcounts;
