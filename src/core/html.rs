// src/core/html.rs
//! Flattening of list markup into `(label, text)` streams.
//!
//! The chip-count page is a run of sibling list items: a rank marker, then
//! the cells that belong to it, then the next rank marker. Rather than walk
//! DOM siblings while classifying, we flatten each list into [`Item`]s once
//! and cut that stream into [`Block`]s with [`split_blocks`].

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Starts a new block.
    Marker,
    /// Marker-styled element from the title region: ends the current block
    /// without starting one.
    Boundary,
    Cell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    /// First class token, if the element has one.
    pub label: Option<String>,
    pub text: String,
}

impl Item {
    pub fn boundary() -> Self {
        Self { kind: ItemKind::Boundary, label: None, text: String::new() }
    }
}

#[cfg(test)]
impl Item {
    fn marker(text: &str) -> Self {
        Self { kind: ItemKind::Marker, label: None, text: text.to_string() }
    }

    fn cell(label: &str, text: &str) -> Self {
        Self { kind: ItemKind::Cell, label: Some(label.to_string()), text: text.to_string() }
    }
}

/// One rank marker and the labelled cells that follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub rank: String,
    pub cells: Vec<(String, String)>,
}

/// CSS classes that drive the flattening.
#[derive(Clone, Copy, Debug)]
pub struct MarkerClasses<'a> {
    pub tag: &'a str,
    pub marker: &'a str,
    pub title: &'a str,
}

pub fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

pub fn first_class(el: &ElementRef) -> Option<String> {
    el.value().classes().next().map(str::to_string)
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn selector(css: &str) -> Selector {
    // Only ever called with crate constants.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Flatten every list that holds at least one non-title rank marker.
///
/// Lists are visited in document order of their first marker, items in
/// child order. Each list ends with a boundary, so a block never reaches
/// into the next list. Returns an empty vec when the page has no data markers.
pub fn flatten(doc: &Html, classes: MarkerClasses) -> Vec<Item> {
    let MarkerClasses { tag, marker, title } = classes;

    // Title region: elements carrying the title class, or nested inside one.
    let title_sel = selector(&format!("{tag}.{title}, .{title} {tag}"));
    let title_ids: HashSet<_> = doc.select(&title_sel).map(|el| el.id()).collect();

    let marker_sel = selector(&format!("{tag}.{marker}"));
    let mut seen_parents = HashSet::new();
    let mut parents = Vec::new();
    for el in doc.select(&marker_sel) {
        if title_ids.contains(&el.id()) {
            continue;
        }
        if let Some(parent) = el.parent() {
            if seen_parents.insert(parent.id()) {
                parents.push(parent);
            }
        }
    }

    let mut items = Vec::new();
    for parent in parents {
        for child in parent.children().filter_map(ElementRef::wrap) {
            if child.value().name() != tag {
                continue;
            }
            let kind = match (has_class(&child, marker), title_ids.contains(&child.id())) {
                (true, false) => ItemKind::Marker,
                (true, true) => ItemKind::Boundary,
                (false, _) => ItemKind::Cell,
            };
            items.push(Item { kind, label: first_class(&child), text: element_text(&child) });
        }
        items.push(Item::boundary());
    }
    items
}

/// Cut a flat item stream into blocks at marker boundaries.
///
/// Items before the first marker, and items after a boundary up to the next
/// marker, belong to no block and are dropped. Unlabelled cells are dropped.
pub fn split_blocks<I>(items: I) -> Vec<Block>
where
    I: IntoIterator<Item = Item>,
{
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for item in items {
        match item.kind {
            ItemKind::Marker => {
                blocks.extend(current.take());
                current = Some(Block { rank: item.text.trim().to_string(), cells: Vec::new() });
            }
            ItemKind::Boundary => blocks.extend(current.take()),
            ItemKind::Cell => {
                if let (Some(block), Some(label)) = (current.as_mut(), item.label) {
                    block.cells.push((label, item.text));
                }
            }
        }
    }
    blocks.extend(current);
    blocks
}
