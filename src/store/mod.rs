//! Tiny key-value file for the "times checked" counter. Values are stored
//! as decimal text in one JSON object; anything missing or unparseable
//! reads as zero. Increments hold an exclusive lockfile across the
//! read-modify-write and publish through a temp file and an atomic rename,
//! so concurrent writers neither interleave nor expose a torn file.

use indexmap::IndexMap;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub const CHECK_COUNT_KEY: &str = "countdown_checks";

const LOCK_ATTEMPTS: u32 = 5_000;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(1);

pub struct StatsStore {
    path: PathBuf,
}

/// Holds `<path>.lock` while alive; dropping releases it.
struct StoreLock {
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one counter. Missing file, missing key, bad JSON and bad
    /// digits all degrade to 0.
    pub fn counter(&self, key: &str) -> u64 {
        self.read_map()
            .get(key)
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Read-modify-write increment, returning the new value. The whole
    /// cycle runs under the lockfile so two writers cannot both read the
    /// same value; the write still lands via `<path>.tmp` and a rename.
    pub fn increment(&self, key: &str) -> io::Result<u64> {
        let _lock = self.lock()?;
        let mut map = self.read_map();
        let next = map
            .get(key)
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0)
            .saturating_add(1);
        map.insert(key.to_string(), next.to_string());
        self.write_map(&map)?;
        Ok(next)
    }

    /// Take `<path>.lock` with `create_new`, retrying briefly while a
    /// concurrent writer holds it.
    fn lock(&self) -> io::Result<StoreLock> {
        let path = self.path.with_extension("lock");
        for _ in 0..LOCK_ATTEMPTS {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(StoreLock { path }),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("could not lock {}", path.display()),
        ))
    }

    fn read_map(&self) -> IndexMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return IndexMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn write_map(&self, map: &IndexMap<String, String>) -> io::Result<()> {
        let body = serde_json::to_string_pretty(map).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("homestretch-store-{name}-{}", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_reads_zero_and_increments_from_it() {
        let path = scratch("missing");
        let store = StatsStore::new(&path);
        assert_eq!(store.counter(CHECK_COUNT_KEY), 0);
        assert_eq!(store.increment(CHECK_COUNT_KEY).unwrap(), 1);
        assert_eq!(store.increment(CHECK_COUNT_KEY).unwrap(), 2);
        assert_eq!(store.counter(CHECK_COUNT_KEY), 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_contents_degrade_to_zero() {
        let path = scratch("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let store = StatsStore::new(&path);
        assert_eq!(store.counter(CHECK_COUNT_KEY), 0);
        assert_eq!(store.increment(CHECK_COUNT_KEY).unwrap(), 1);

        fs::write(&path, "{\"countdown_checks\": \"eleventy\"}").unwrap();
        assert_eq!(store.counter(CHECK_COUNT_KEY), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn values_are_decimal_text_and_other_keys_survive() {
        let path = scratch("text");
        fs::write(&path, "{\"other\": \"7\"}").unwrap();
        let store = StatsStore::new(&path);
        store.increment(CHECK_COUNT_KEY).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let map: IndexMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get(CHECK_COUNT_KEY).map(String::as_str), Some("1"));
        assert_eq!(map.get("other").map(String::as_str), Some("7"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let path = scratch("concurrent");
        let mut handles = Vec::new();
        for _ in 0..4 {
            let path = path.clone();
            handles.push(thread::spawn(move || {
                let store = StatsStore::new(&path);
                for _ in 0..500 {
                    store.increment(CHECK_COUNT_KEY).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        let store = StatsStore::new(&path);
        assert_eq!(store.counter(CHECK_COUNT_KEY), 2000);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn the_lock_is_released_after_an_increment() {
        let path = scratch("lock");
        let store = StatsStore::new(&path);
        store.increment(CHECK_COUNT_KEY).unwrap();
        assert!(!path.with_extension("lock").exists());
        let _ = fs::remove_file(&path);
    }
}
