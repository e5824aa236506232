// src/scrape.rs
//! Pagination driver: fetch page after page for one event day and fold the
//! extracted records into a per-player history.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    config::{consts::FIRST_PAGE, DayTable},
    core::PageSource,
    error::{Result, ScrapeError},
    model::{ChipRecord, Player, PlayerAttributes},
    pages::chipcounts,
    progress::Progress,
};

/// Name → [`Player`] for one day's run, iterated in first-seen order.
///
/// Merge invariants:
/// - at most one `Player` per distinct name;
/// - the attributes a player is created with are the ones from its first
///   occurrence; later occurrences never change them;
/// - every record is appended, in the order it was merged. Repeated
///   (day, rank) pairs are kept.
#[derive(Debug, Default)]
pub struct PlayerMap {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PlayerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the player by name (creating it from `attrs` if new) and append `record`.
    ///
    /// `attrs.name` must be set; the extractor guarantees this.
    pub fn merge(&mut self, attrs: PlayerAttributes, record: ChipRecord) {
        let PlayerAttributes { name, extra } = attrs;
        let name = name.unwrap_or_default();

        let idx = match self.index.get(&name) {
            Some(&idx) => {
                if !extra.is_empty() && &extra != self.players[idx].attributes() {
                    debug!(player = %name, "keeping first-seen attributes");
                }
                idx
            }
            None => {
                self.players.push(Player::new(name.clone(), extra));
                self.index.insert(name, self.players.len() - 1);
                self.players.len() - 1
            }
        };
        self.players[idx].push(record);
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }
}

impl<'a> IntoIterator for &'a PlayerMap {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scrape every page of `day` from `source`.
///
/// Starts at page 1 and stops at the first page with no rank entries. Any
/// other error (fetch, parse) aborts the whole day and the partial map is
/// dropped.
pub fn scrape_day<S: PageSource>(
    source: &S,
    day: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PlayerMap> {
    let day_id = DayTable::global().resolve(day)?;
    debug!(day, day_id, "scraping event day");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(day, day_id);
    }

    let mut players = PlayerMap::new();
    let mut page = FIRST_PAGE;

    loop {
        let markup = source.fetch(day_id, page)?;

        let extraction = match chipcounts::extract(&markup, day) {
            Ok(e) => e,
            Err(ScrapeError::EmptyPage) => {
                debug!(day, page, players = players.len(), "no rank entries; done");
                break;
            }
            Err(e) => return Err(e),
        };

        let mut records = 0usize;
        for item in extraction {
            let (attrs, record) = item?;
            players.merge(attrs, record);
            records += 1;
        }
        debug!(day, page, records, "parsed page");

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, records);
        }
        page += 1;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(page - FIRST_PAGE, players.len());
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn attrs(name: &str, extra: &[(&str, &str)]) -> PlayerAttributes {
        PlayerAttributes {
            name: Some(name.to_string()),
            extra: extra.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    #[test]
    fn merge_creates_one_player_per_name() {
        let mut map = PlayerMap::new();
        map.merge(attrs("Alice", &[]), ChipRecord::new(100, "1", "1a"));
        map.merge(attrs("Bob", &[]), ChipRecord::new(50, "2", "1a"));
        map.merge(attrs("Alice", &[]), ChipRecord::new(200, "1", "1b"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        let counts: Vec<u64> = map.get("Alice").unwrap().history().iter().map(|r| r.chip_count()).collect();
        assert_eq!(counts, vec![100, 200]);
    }

    #[test]
    fn merge_keeps_first_attributes() {
        let mut map = PlayerMap::new();
        map.merge(attrs("Alice", &[("hometown", "Reno")]), ChipRecord::new(1, "1", "1a"));
        map.merge(attrs("Alice", &[("hometown", "Paris"), ("country", "FR")]), ChipRecord::new(2, "1", "1a"));

        let alice = map.get("Alice").unwrap();
        assert_eq!(alice.attributes(), &BTreeMap::from([("hometown".to_string(), "Reno".to_string())]));
    }

    #[test]
    fn merge_does_not_dedup_repeated_ranks() {
        let mut map = PlayerMap::new();
        map.merge(attrs("Alice", &[]), ChipRecord::new(1, "1", "1a"));
        map.merge(attrs("Alice", &[]), ChipRecord::new(1, "1", "1a"));
        assert_eq!(map.get("Alice").unwrap().history().len(), 2);
    }
}
