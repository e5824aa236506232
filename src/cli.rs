// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{
        consts::{BASE_URL, DEFAULT_DAY, DEFAULT_OUT_DIR},
        options::{AppOptions, ScrapeOptions, StoreOptions, StoreTarget},
        DayTable,
    },
    core::HttpFetcher,
    error::Result,
    progress::Progress,
    runner,
    store::{DataStore, LocalJsonStore, StdoutStore},
};

#[derive(Debug, Parser)]
#[command(name = "chip_scrape", version, about = "Scrape tournament chip counts for one event day")]
pub struct Cli {
    /// Event day label (e.g. 1a, 2ab, 10)
    #[arg(short, long, default_value = DEFAULT_DAY)]
    pub day: String,

    /// Print known day labels with their site ids and exit
    #[arg(long)]
    pub list_days: bool,

    /// Output directory for JSON files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Write the JSON array to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Chip counts endpoint
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                day: self.day.clone(),
                base_url: self.base_url.clone(),
                ..ScrapeOptions::default()
            },
            store: StoreOptions {
                target: if self.stdout { StoreTarget::Stdout } else { StoreTarget::LocalJson },
                out_dir: self.out.clone(),
            },
        }
    }
}

/// Human-facing status lines (stderr in the binary). Write failures are ignored.
struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, day: &str, day_id: u32) {
        let _ = writeln!(self.out, "Scraping day {day} (site day {day_id})…");
    }

    fn page_done(&mut self, page: u32, records: usize) {
        let _ = writeln!(self.out, "  page {page}: {records} records");
    }

    fn finish(&mut self, pages: u32, players: usize) {
        let _ = writeln!(self.out, "Done: {players} players across {pages} pages");
    }
}

pub fn run(cli: Cli) -> Result<()> {
    crate::log::init(cli.verbose);

    if cli.list_days {
        for (label, id) in DayTable::global().iter() {
            println!("{label},{id}");
        }
        return Ok(());
    }

    let opts = cli.options();
    // Validate the label before any network work.
    DayTable::global().resolve(&opts.scrape.day)?;

    let fetcher = HttpFetcher::new(&opts.scrape)?;
    let store: Box<dyn DataStore> = match opts.store.target {
        StoreTarget::LocalJson => Box::new(LocalJsonStore::new(&opts.store.out_dir, &opts.scrape.day)),
        StoreTarget::Stdout => Box::new(StdoutStore),
    };

    let mut progress = ConsoleProgress { out: io::stderr() };
    runner::collect_data(&fetcher, store.as_ref(), &opts.scrape.day, Some(&mut progress))?;
    Ok(())
}
