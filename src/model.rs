// src/model.rs
//! Players and their chip history, plus the JSON shapes they are stored as.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chip count observation. Never mutated after extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipRecord {
    chip_count: u64,
    rank: String,
    event_day: String,
    timestamp: DateTime<Utc>,
}

impl ChipRecord {
    /// Stamped with the current time.
    pub fn new(chip_count: u64, rank: impl Into<String>, event_day: impl Into<String>) -> Self {
        Self::at(chip_count, rank, event_day, Utc::now())
    }

    pub fn at(
        chip_count: u64,
        rank: impl Into<String>,
        event_day: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self { chip_count, rank: rank.into(), event_day: event_day.into(), timestamp }
    }

    pub fn chip_count(&self) -> u64 { self.chip_count }
    pub fn rank(&self) -> &str { &self.rank }
    pub fn event_day(&self) -> &str { &self.event_day }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

/// `(1b, 13450)`
impl fmt::Display for ChipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.event_day, self.chip_count)
    }
}

/// Attributes read from one rank block. `name` is the identity key; the
/// rest are whatever other labelled cells the block carried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerAttributes {
    pub name: Option<String>,
    pub extra: BTreeMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    history: Vec<ChipRecord>,
    attributes: BTreeMap<String, String>,
}

impl Player {
    pub fn new(name: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self { name: name.into(), history: Vec::new(), attributes }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn history(&self) -> &[ChipRecord] { &self.history }
    pub fn attributes(&self) -> &BTreeMap<String, String> { &self.attributes }

    /// Appends unconditionally; history order is discovery order.
    pub fn push(&mut self, record: ChipRecord) {
        self.history.push(record);
    }

    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord::from(self)
    }
}

/// Identity is the name alone.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/* ---------- serialized shapes ---------- */

/// `{"name": .., "history": [..]}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub history: Vec<ChipHistoryRecord>,
}

/// `{"timestamp": .., "day": .., "rank": .., "chip_count": ..}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipHistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub day: String,
    pub rank: String,
    pub chip_count: u64,
}

impl From<&ChipRecord> for ChipHistoryRecord {
    fn from(r: &ChipRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            day: r.event_day.clone(),
            rank: r.rank.clone(),
            chip_count: r.chip_count,
        }
    }
}

impl From<ChipHistoryRecord> for ChipRecord {
    fn from(r: ChipHistoryRecord) -> Self {
        ChipRecord::at(r.chip_count, r.rank, r.day, r.timestamp)
    }
}

impl From<&Player> for PlayerRecord {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            history: p.history.iter().map(ChipHistoryRecord::from).collect(),
        }
    }
}

/// Optional attributes are not part of the stored shape and come back empty.
impl From<PlayerRecord> for Player {
    fn from(r: PlayerRecord) -> Self {
        let mut player = Player::new(r.name, BTreeMap::new());
        player.history = r.history.into_iter().map(ChipRecord::from).collect();
        player
    }
}
