//! Snapshot store: locating, loading, and persisting timetable snapshots.
//!
//! Snapshots live as `<timestamp>.json` files in one directory. Timestamps use
//! a sortable format, so "latest" is simply the lexicographically greatest
//! filename. An optional sibling `<timestamp>.pdf` may exist for display and is
//! located by the same most-recent-by-name rule, independent of the JSON lookup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{Result, TimetableError};
use crate::model::TimetableDocument;

/// Filename timestamp format; lexicographic and chronological order coincide.
const SNAPSHOT_ID_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Build a fresh snapshot id from a timestamp.
pub fn snapshot_id_for(timestamp: NaiveDateTime) -> String {
    timestamp.format(SNAPSHOT_ID_FORMAT).to_string()
}

/// A directory of timetable snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a snapshot id resolves to, whether or not the file exists.
    pub fn snapshot_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Snapshot ids, newest first. Any access failure yields an empty list.
    pub fn list_snapshots(&self) -> Vec<String> {
        self.list_stems("json")
    }

    /// The newest snapshot id, if any snapshot exists.
    pub fn latest_snapshot_id(&self) -> Option<String> {
        self.list_snapshots().into_iter().next()
    }

    /// The newest sibling PDF, independent of the JSON lookup.
    pub fn latest_pdf(&self) -> Option<PathBuf> {
        let stem = self.list_stems("pdf").into_iter().next()?;
        Some(self.dir.join(format!("{stem}.pdf")))
    }

    /// Load a snapshot leniently: missing, unreadable, and unparsable files
    /// all yield `None`.
    pub fn load(&self, id: &str) -> Option<TimetableDocument> {
        self.load_strict(id).ok()
    }

    /// Load a snapshot, distinguishing a missing file (`NotFound`) from one
    /// that exists but cannot be read or parsed (`Malformed`).
    pub fn load_strict(&self, id: &str) -> Result<TimetableDocument> {
        let path = self.snapshot_path(id);
        let json = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                TimetableError::NotFound(format!("snapshot {id} does not exist"))
            } else {
                TimetableError::Malformed(format!("snapshot {id} is unreadable: {err}"))
            }
        })?;
        serde_json::from_str(&json)
            .map_err(|err| TimetableError::Malformed(format!("snapshot {id}: {err}")))
    }

    /// Load the newest snapshot leniently, or `None` if nothing loads.
    pub fn load_latest(&self) -> Option<TimetableDocument> {
        self.load(&self.latest_snapshot_id()?)
    }

    /// Load the newest snapshot, reporting which id was loaded.
    ///
    /// `NotFound` when the directory holds no snapshots at all; `Malformed`
    /// when the newest one exists but will not parse.
    pub fn load_latest_strict(&self) -> Result<(String, TimetableDocument)> {
        let id = self
            .latest_snapshot_id()
            .ok_or_else(|| TimetableError::NotFound("no timetable snapshots exist".to_string()))?;
        let document = self.load_strict(&id)?;
        Ok((id, document))
    }

    /// Persist a snapshot as pretty-printed JSON, overwriting any existing
    /// file for that id.
    ///
    /// Writes go through a temp file plus atomic rename, and I/O failures
    /// propagate - this is the one path where a swallowed error would silently
    /// destroy user edits.
    pub fn save(&self, document: &TimetableDocument, id: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(document)
            .map_err(|err| TimetableError::Persistence(err.to_string()))?;
        let path = self.snapshot_path(id);
        let temp_path = self.dir.join(format!("{id}.json.tmp"));
        fs::write(&temp_path, json)?;
        replace_file(&temp_path, &path)?;
        Ok(())
    }

    fn list_stems(&self, extension: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut stems: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                    return None;
                }
                Some(path.file_stem()?.to_str()?.to_string())
            })
            .collect();
        stems.sort();
        stems.reverse();
        stems
    }
}

/// Rename a file over its destination, with a remove-and-retry fallback for
/// platforms where rename fails if the target exists (notably Windows).
///
/// The temp file is cleaned up if the rename ultimately fails.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> SnapshotStore {
        SnapshotStore::new(dir.to_path_buf())
    }

    #[test]
    fn snapshot_id_is_sortable_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(8, 30, 5)
            .unwrap();
        assert_eq!(snapshot_id_for(timestamp), "2025-06-15-083005");
    }

    #[test]
    fn list_is_newest_first_by_name() {
        let dir = tempdir().unwrap();
        for name in [
            "2025-01-01-080000.json",
            "2025-06-15-080000.json",
            "2024-12-31-080000.json",
        ] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        // Non-JSON files are not snapshots
        fs::write(dir.path().join("2026-01-01-080000.pdf"), "").unwrap();

        let store = store_in(dir.path());
        assert_eq!(
            store.list_snapshots(),
            vec![
                "2025-06-15-080000",
                "2025-01-01-080000",
                "2024-12-31-080000"
            ]
        );
        assert_eq!(
            store.latest_snapshot_id().as_deref(),
            Some("2025-06-15-080000")
        );
    }

    #[test]
    fn list_is_empty_for_missing_directory() {
        let store = SnapshotStore::new("/nonexistent/timetables");
        assert!(store.list_snapshots().is_empty());
        assert!(store.latest_snapshot_id().is_none());
        assert!(store.load_latest().is_none());
    }

    #[test]
    fn latest_pdf_is_independent_of_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("2025-01-01-080000.json"), "{}").unwrap();
        fs::write(dir.path().join("2025-02-01-080000.pdf"), "").unwrap();
        fs::write(dir.path().join("2025-03-01-080000.pdf"), "").unwrap();

        let store = store_in(dir.path());
        assert_eq!(
            store.latest_pdf(),
            Some(dir.path().join("2025-03-01-080000.pdf"))
        );
    }

    #[test]
    fn load_is_lenient_but_load_strict_distinguishes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("2025-01-01-080000.json"), "not json").unwrap();
        let store = store_in(dir.path());

        assert!(store.load("2025-01-01-080000").is_none());
        assert!(store.load("2099-01-01-080000").is_none());

        assert!(matches!(
            store.load_strict("2025-01-01-080000"),
            Err(TimetableError::Malformed(_))
        ));
        assert!(matches!(
            store.load_strict("2099-01-01-080000"),
            Err(TimetableError::NotFound(_))
        ));
    }

    #[test]
    fn load_latest_strict_reports_missing_store() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(
            store.load_latest_strict(),
            Err(TimetableError::NotFound(_))
        ));
    }

    #[test]
    fn save_creates_directory_and_overwrites() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("timetables");
        let store = SnapshotStore::new(&nested);

        let mut document = TimetableDocument::default();
        document.metadata.school_name = "Northside High".to_string();
        store.save(&document, "2025-01-01-080000").unwrap();

        document.metadata.school_name = "Southside High".to_string();
        store.save(&document, "2025-01-01-080000").unwrap();

        let loaded = store.load("2025-01-01-080000").unwrap();
        assert_eq!(loaded.metadata.school_name, "Southside High");
        // No stray temp file left behind
        assert!(!nested.join("2025-01-01-080000.json.tmp").exists());
    }
}
