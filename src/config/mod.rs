// src/config/mod.rs
pub mod consts;
pub mod days;
pub mod options;

pub use days::DayTable;
