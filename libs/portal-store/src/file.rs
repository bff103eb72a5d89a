use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::warn;

use crate::KvStore;

/// File-backed store: the whole key space mirrored to a single JSON file.
///
/// The file is loaded once on open and rewritten after every mutation, so a
/// store reopened on the same path sees all prior writes. A missing or
/// corrupt file loads as an empty map. If a flush fails the in-memory view
/// stays authoritative for the rest of the session and the write is retried
/// on the next mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "corrupt store file; starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to encode store file");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), %err, "failed to flush store file");
        }
    }
}

impl KvStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value);
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get_raw("anything"), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        fs::write(&path, "][ definitely not json").expect("write");
        let store = FileStore::open(&path);
        assert_eq!(store.get_raw("anything"), None);
    }
}
