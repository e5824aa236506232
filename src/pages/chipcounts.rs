// src/pages/chipcounts.rs
//! Extraction for the chip-counts page.
//!
//! Page shape (one list per results grid):
//! ```text
//! <li class="place titlebg">Place</li> <li class="player titlebg">Player</li> ...   ← header row
//! <li class="place">1</li> <li class="player">Name</li> <li class="hometown">..</li> <li class="chipstack">13,450</li>
//! <li class="place">2</li> ...
//! ```
//! Each data `place` item opens a block that runs until the next `place`.
//! Within a block, `player` sets the name, `chipstack` the count, and any
//! other labelled item becomes an optional attribute (last write wins).

use scraper::Html;

use crate::config::consts::{CHIPSTACK_CLASS, LIST_TAG, PLAYER_NAME_CLASS, RANK_CLASS, TITLE_CLASS};
use crate::core::html::{flatten, split_blocks, Block, MarkerClasses};
use crate::core::sanitize::clean_number;
use crate::error::{ParseError, Result, ScrapeError};
use crate::model::{ChipRecord, PlayerAttributes};

const CLASSES: MarkerClasses<'static> = MarkerClasses {
    tag: LIST_TAG,
    marker: RANK_CLASS,
    title: TITLE_CLASS,
};

/// Blocks of one page, turned into records one at a time.
#[derive(Debug)]
pub struct Extraction {
    blocks: std::vec::IntoIter<Block>,
    day: String,
}

#[cfg(test)]
impl Extraction {
    fn remaining(&self) -> usize {
        self.blocks.len()
    }
}

impl Iterator for Extraction {
    type Item = Result<(PlayerAttributes, ChipRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.blocks.next()?;
        Some(parse_block(block, &self.day).map_err(ScrapeError::from))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.blocks.size_hint()
    }
}

/// Split a page into rank blocks.
///
/// Fails with [`ScrapeError::EmptyPage`] when the page has no data rank
/// markers, which is how the driver knows it has run past the last page.
/// No state is kept between calls.
pub fn extract(markup: &str, day: &str) -> Result<Extraction> {
    let doc = Html::parse_document(markup);
    let blocks = split_blocks(flatten(&doc, CLASSES));
    if blocks.is_empty() {
        return Err(ScrapeError::EmptyPage);
    }
    Ok(Extraction { blocks: blocks.into_iter(), day: day.to_string() })
}

fn parse_block(block: Block, day: &str) -> std::result::Result<(PlayerAttributes, ChipRecord), ParseError> {
    let Block { rank, cells } = block;

    let mut attrs = PlayerAttributes::default();
    let mut chips = None;

    for (label, text) in cells {
        match label.as_str() {
            PLAYER_NAME_CLASS => attrs.name = Some(text.trim().to_string()),
            CHIPSTACK_CLASS => chips = Some(clean_number(&text)?),
            _ => {
                attrs.extra.insert(label, text);
            }
        }
    }

    // A block without a usable name has no identity to merge under.
    if attrs.name.as_deref().is_none_or(str::is_empty) {
        return Err(ParseError::MissingName { rank });
    }
    let chip_count = chips.ok_or_else(|| ParseError::MissingChipCount { rank: rank.clone() })?;

    Ok((attrs, ChipRecord::new(chip_count, rank, day)))
}
