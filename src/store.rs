// src/store.rs
//! Persistence sinks for serialized player records.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::config::consts::DATA_FILE_PREFIX;
use crate::error::{Result, ScrapeError};

pub trait DataStore {
    /// Append `data` (one JSON value per player) to durable storage.
    fn store(&self, data: &[Value]) -> Result<()>;
}

/// One JSON array per day and capture time: `<dir>/data-<day>-<utc>.json`.
///
/// Each call reads the array, extends it and rewrites the file. Not atomic;
/// two writers on the same file will lose data.
#[derive(Clone, Debug)]
pub struct LocalJsonStore {
    dir: PathBuf,
    event_day: String,
}

impl LocalJsonStore {
    pub fn new(dir: impl Into<PathBuf>, event_day: impl Into<String>) -> Self {
        Self { dir: dir.into(), event_day: event_day.into() }
    }

    pub fn path_for(&self, time: DateTime<Utc>) -> PathBuf {
        let stamp = time.format("%Y-%m-%dT%H-%M-%S%.6fZ");
        self.dir.join(format!("{DATA_FILE_PREFIX}-{}-{stamp}.json", self.event_day))
    }

    /// Same as [`DataStore::store`] with an explicit capture time.
    pub fn store_at(&self, time: DateTime<Utc>, data: &[Value]) -> Result<PathBuf> {
        ensure_directory(&self.dir)?;
        let path = self.path_for(time);

        let mut current: Vec<Value> = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| store_err(&path, source))?;
            serde_json::from_str(&text)?
        } else {
            Vec::new()
        };
        current.extend_from_slice(data);

        let text = serde_json::to_string(&current)?;
        fs::write(&path, text).map_err(|source| store_err(&path, source))?;

        info!(path = %path.display(), added = data.len(), total = current.len(), "stored records");
        Ok(path)
    }
}

impl DataStore for LocalJsonStore {
    fn store(&self, data: &[Value]) -> Result<()> {
        self.store_at(Utc::now(), data).map(|_| ())
    }
}

/// Pretty-prints the array to stdout instead of touching disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutStore;

impl DataStore for StdoutStore {
    fn store(&self, data: &[Value]) -> Result<()> {
        let text = serde_json::to_string_pretty(data)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{text}").map_err(|source| store_err(Path::new("<stdout>"), source))?;
        Ok(())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let source = io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(store_err(dir, source));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| store_err(dir, source))?;
    }
    Ok(())
}

fn store_err(path: &Path, source: io::Error) -> ScrapeError {
    ScrapeError::Store { path: path.to_path_buf(), source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("chip_store_{name}"));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn file_name_has_day_and_time() {
        let store = LocalJsonStore::new("data", "2ab");
        let t = Utc.with_ymd_and_hms(2021, 7, 5, 18, 30, 1).unwrap();
        assert_eq!(
            store.path_for(t),
            PathBuf::from("data").join("data-2ab-2021-07-05T18-30-01.000000Z.json")
        );
    }

    #[test]
    fn store_creates_dir_and_appends() {
        let dir = tmp_dir("append");
        let store = LocalJsonStore::new(&dir, "1a");
        let t = Utc.with_ymd_and_hms(2021, 7, 5, 0, 0, 0).unwrap();

        let path = store.store_at(t, &[json!({"name": "Alice", "history": []})]).unwrap();
        assert!(path.starts_with(&dir));
        store.store_at(t, &[json!({"name": "Bob", "history": []})]).unwrap();

        let saved: Vec<Value> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0]["name"], "Alice");
        assert_eq!(saved[1]["name"], "Bob");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tmp_dir("not_a_dir");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        fs::write(&dir, "x").unwrap();
        let err = ensure_directory(&dir).unwrap_err();
        assert!(matches!(err, ScrapeError::Store { .. }));
        let _ = fs::remove_file(&dir);
    }
}
