// tests/scrape_pipeline.rs
//
// Pagination + merge against in-memory pages, no network.
//
use std::cell::RefCell;

use chip_scrape::{
    core::PageSource,
    error::{FetchError, ParseError, Result, ScrapeError},
    progress::Progress,
    scrape::scrape_day,
};

/// Serves canned pages in order; anything past the end is an empty results page.
struct CannedPages {
    pages: Vec<String>,
    calls: RefCell<Vec<(u32, u32)>>,
}

impl CannedPages {
    fn new(pages: Vec<String>) -> Self {
        Self { pages, calls: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.borrow().clone()
    }
}

impl PageSource for CannedPages {
    fn fetch(&self, day_id: u32, page: u32) -> Result<String> {
        self.calls.borrow_mut().push((day_id, page));
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_else(|| page_html(&[])))
    }
}

struct FailingSource;

impl PageSource for FailingSource {
    fn fetch(&self, _day_id: u32, _page: u32) -> Result<String> {
        Err(FetchError::EmptyBody { url: "http://test/chips".into() }.into())
    }
}

#[derive(Default)]
struct Recorder {
    began: Option<(String, u32)>,
    pages: Vec<(u32, usize)>,
    finished: Option<(u32, usize)>,
}

impl Progress for Recorder {
    fn begin(&mut self, day: &str, day_id: u32) {
        self.began = Some((day.to_string(), day_id));
    }
    fn page_done(&mut self, page: u32, records: usize) {
        self.pages.push((page, records));
    }
    fn finish(&mut self, pages: u32, players: usize) {
        self.finished = Some((pages, players));
    }
}

fn page_html(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::from(
        r#"<ul class="grid">
             <li class="place titlebg">Place</li><li class="player titlebg">Player</li>
             <li class="hometown titlebg">Hometown</li><li class="chipstack titlebg">Chips</li>"#,
    );
    for (rank, name, town, chips) in rows {
        body.push_str(&format!(
            r#"<li class="place">{rank}</li><li class="player">{name}</li>
               <li class="hometown">{town}</li><li class="chipstack">{chips}</li>"#
        ));
    }
    body.push_str("</ul>");
    format!("<html><body><h1>Chip Counts</h1>{body}</body></html>")
}

#[test]
fn first_day_two_players_one_page() {
    let source = CannedPages::new(vec![page_html(&[
        ("1", "Alice", "Reno", "13,450"),
        ("2", "Bob", "Paris", "900"),
    ])]);

    let players = scrape_day(&source, "1a", None).unwrap();

    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.history().len() == 1));
    assert_eq!(players.get("Alice").unwrap().history()[0].chip_count(), 13450);
    assert_eq!(players.get("Bob").unwrap().history()[0].event_day(), "1a");
    // "1a" resolves to the first site day id.
    assert_eq!(source.calls(), vec![(6527, 1), (6527, 2)]);
}

#[test]
fn same_player_on_two_pages_merges_in_page_order() {
    let source = CannedPages::new(vec![
        page_html(&[("1", "Alice", "Reno", "100"), ("2", "Bob", "Paris", "50")]),
        page_html(&[("3", "Carol", "Oslo", "40"), ("4", "Alice", "Elsewhere", "30")]),
    ]);

    let players = scrape_day(&source, "2c", None).unwrap();

    assert_eq!(players.len(), 3);
    let alice = players.get("Alice").unwrap();
    let ranks: Vec<&str> = alice.history().iter().map(|r| r.rank()).collect();
    assert_eq!(ranks, vec!["1", "4"]);
    let counts: Vec<u64> = alice.history().iter().map(|r| r.chip_count()).collect();
    assert_eq!(counts, vec![100, 30]);
    assert_eq!(alice.attributes().get("hometown").map(String::as_str), Some("Reno"));
    assert_eq!(players.names().collect::<Vec<_>>(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn stops_at_first_empty_page() {
    let source = CannedPages::new(vec![
        page_html(&[("1", "Alice", "Reno", "100")]),
        page_html(&[]),
        page_html(&[("1", "Ghost", "Nowhere", "1")]),
    ]);

    let players = scrape_day(&source, "10", None).unwrap();

    assert_eq!(players.len(), 1);
    assert!(!players.contains("Ghost"));
    assert_eq!(source.calls(), vec![(6539, 1), (6539, 2)]);
}

#[test]
fn empty_first_page_yields_empty_map() {
    let source = CannedPages::new(Vec::new());
    let players = scrape_day(&source, "3", None).unwrap();
    assert!(players.is_empty());
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn progress_sees_every_page() {
    let source = CannedPages::new(vec![
        page_html(&[("1", "Alice", "Reno", "100"), ("2", "Bob", "Paris", "50")]),
        page_html(&[("3", "Carol", "Oslo", "40")]),
    ]);
    let mut rec = Recorder::default();

    scrape_day(&source, "1b", Some(&mut rec)).unwrap();

    assert_eq!(rec.began, Some(("1b".to_string(), 6528)));
    assert_eq!(rec.pages, vec![(1, 2), (2, 1)]);
    assert_eq!(rec.finished, Some((2, 3)));
}

#[test]
fn parse_error_aborts_the_day() {
    let source = CannedPages::new(vec![
        page_html(&[("1", "Alice", "Reno", "100")]),
        page_html(&[("2", "Bob", "Paris", "n/a")]),
    ]);

    let err = scrape_day(&source, "1a", None).unwrap_err();

    assert!(matches!(err, ScrapeError::Parse(ParseError::InvalidNumber { .. })));
    assert_eq!(source.calls().len(), 2);
}

#[test]
fn fetch_error_is_not_a_stop_signal() {
    let err = scrape_day(&FailingSource, "1a", None).unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)));
}

#[test]
fn unknown_day_fetches_nothing() {
    let source = CannedPages::new(Vec::new());
    let err = scrape_day(&source, "0", None).unwrap_err();
    assert!(matches!(err, ScrapeError::UnknownDay { .. }));
    assert!(source.calls().is_empty());
}
