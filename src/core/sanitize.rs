// src/core/sanitize.rs

use crate::config::consts::THOUSANDS_SEP;
use crate::error::ParseError;

/// "13,450" → 13450. Surrounding whitespace is ignored; anything else that
/// isn't a plain non-negative integer after dropping separators is rejected.
pub fn clean_number(text: &str) -> Result<u64, ParseError> {
    let digits: String = text.trim().chars().filter(|&c| c != THOUSANDS_SEP).collect();
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidNumber { text: text.to_string() })
}
