// src/config/days.rs
//! Event-day label → site day id lookup.
//!
//! Built once on first use and never mutated. The mapping is positional:
//! `EVENT_DAYS[i]` resolves to `DAY_ID_BASE + i`.

use std::sync::OnceLock;

use super::consts::{DAY_ID_BASE, EVENT_DAYS};
use crate::error::{Result, ScrapeError};

#[derive(Debug)]
pub struct DayTable {
    entries: Vec<(&'static str, u32)>,
}

static DAYS: OnceLock<DayTable> = OnceLock::new();

impl DayTable {
    pub fn new(labels: &[&'static str], base: u32) -> Self {
        let entries = labels
            .iter()
            .zip(base..)
            .map(|(label, id)| (*label, id))
            .collect();
        Self { entries }
    }

    /// The process-wide table for the configured tournament.
    pub fn global() -> &'static DayTable {
        DAYS.get_or_init(|| DayTable::new(&EVENT_DAYS, DAY_ID_BASE))
    }

    pub fn resolve(&self, label: &str) -> Result<u32> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, id)| *id)
            .ok_or_else(|| ScrapeError::UnknownDay { label: label.to_string() })
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
