// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://www.wsop.com/tournaments/chipcounts";
pub const USER_AGENT: &str = concat!("chip_scrape/", env!("CARGO_PKG_VERSION"));

// Fixed site identifiers (account, grid, tournament)
pub const SITE_AID: u32 = 2;
pub const SITE_GRID: u32 = 1487;
pub const SITE_TID: u32 = 16465;
pub const PAGE_SIZE: u32 = 5;
pub const FIRST_PAGE: u32 = 1;

// Event days, in site order. Label at index i maps to DAY_ID_BASE + i.
pub const EVENT_DAYS: [&str; 13] = [
    "1a", "1b", "1c", "2ab", "2c", "3", "4", "5", "6", "7", "8", "9", "10",
];
pub const DAY_ID_BASE: u32 = 6527;
pub const DEFAULT_DAY: &str = "10";

// Markup
pub const LIST_TAG: &str = "li";
pub const RANK_CLASS: &str = "place";
pub const PLAYER_NAME_CLASS: &str = "player";
pub const CHIPSTACK_CLASS: &str = "chipstack";
pub const TITLE_CLASS: &str = "titlebg";
pub const THOUSANDS_SEP: char = ',';

// Store
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DATA_FILE_PREFIX: &str = "data";
