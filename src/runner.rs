// src/runner.rs
use serde_json::Value;
use tracing::info;

use crate::{
    core::PageSource,
    error::{Result, ScrapeError},
    model::PlayerRecord,
    progress::Progress,
    scrape::{scrape_day, PlayerMap},
    store::DataStore,
};

/// Serialize every player to its stored shape, in first-seen order.
pub fn serialize_players(players: &PlayerMap) -> Result<Vec<Value>> {
    players
        .iter()
        .map(|p| serde_json::to_value(PlayerRecord::from(p)).map_err(ScrapeError::from))
        .collect()
}

/// Scrape one event day and hand the result to `store` in a single call.
/// Returns the number of players stored. On any error nothing is stored.
pub fn collect_data<S, D>(
    source: &S,
    store: &D,
    day: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<usize>
where
    S: PageSource,
    D: DataStore + ?Sized,
{
    let players = scrape_day(source, day, progress)?;
    let data = serialize_players(&players)?;
    store.store(&data)?;
    info!(day, players = data.len(), "day collected");
    Ok(data.len())
}
