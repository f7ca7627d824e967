//! Guest store with write-through snapshot persistence
//!
//! The store owns the guest list. Every mutation is followed by a full
//! snapshot write; there is no batching and no rollback if the write fails.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use super::record::{GuestRecord, GuestStatus};

/// Fixed key the guest list is persisted under
pub const SNAPSHOT_KEY: &str = "guests.json";

/// High-level events surfaced on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadedSaved,
    Cleared,
    ExcelLoaded,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LoadedSaved => write!(f, "Loaded saved data."),
            Notice::Cleared => write!(f, "Data cleared."),
            Notice::ExcelLoaded => write!(f, "Excel data loaded."),
        }
    }
}

/// Durable key-value slot holding the serialized guest list
pub trait SnapshotStorage {
    /// Read the snapshot, `None` if nothing was ever written or it was removed
    fn read(&self) -> Result<Option<String>>;
    /// Overwrite the snapshot
    fn write(&mut self, snapshot: &str) -> Result<()>;
    /// Delete the snapshot; deleting a missing snapshot is not an error
    fn remove(&mut self) -> Result<()>;
}

/// Snapshot stored as a JSON file in the data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage for `<dir>/guests.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a new snapshot is written to before it replaces the old one
    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read saved guests: {}", self.path.display())),
        }
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }
        // Write beside the snapshot, then swap it in
        let tmp = self.tmp_path();
        fs::write(&tmp, snapshot)
            .with_context(|| format!("Failed to save guests: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to save guests: {}", self.path.display()))
    }

    fn remove(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to delete saved guests: {}", self.path.display())),
        }
    }
}

/// In-memory snapshot slot
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub snapshot: Option<String>,
    pub writes: usize,
}

#[cfg(test)]
impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        self.snapshot = Some(snapshot.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }
}

/// Owner of the guest list
pub struct GuestStore<S: SnapshotStorage> {
    guests: Vec<GuestRecord>,
    storage: S,
}

impl<S: SnapshotStorage> GuestStore<S> {
    /// Empty store; call [`GuestStore::load_persisted`] to restore a snapshot
    pub fn new(storage: S) -> Self {
        Self {
            guests: Vec::new(),
            storage,
        }
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    pub fn get(&self, index: usize) -> Option<&GuestRecord> {
        self.guests.get(index)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Index of the first guest that has not been contacted yet
    pub fn next_pending(&self) -> Option<usize> {
        self.guests
            .iter()
            .position(|g| g.status == GuestStatus::Pending)
    }

    /// Replace the whole list with freshly imported rows, all pending
    pub fn import_rows(&mut self, rows: Vec<Map<String, Value>>) -> Result<Notice> {
        let previous = self.guests.len();
        self.guests = rows.into_iter().map(GuestRecord::from_row).collect();
        log::info!(
            "Imported {} guests (replacing {})",
            self.guests.len(),
            previous
        );
        self.persist()?;
        Ok(Notice::ExcelLoaded)
    }

    /// Restore the list from the persisted snapshot, if there is one
    pub fn load_persisted(&mut self) -> Result<Option<Notice>> {
        let Some(snapshot) = self.storage.read()? else {
            log::debug!("No saved guests found");
            return Ok(None);
        };

        self.guests =
            serde_json::from_str(&snapshot).context("Failed to parse saved guest data")?;
        log::info!("Loaded {} saved guests", self.guests.len());
        Ok(Some(Notice::LoadedSaved))
    }

    /// Drop every guest and delete the snapshot
    pub fn clear(&mut self) -> Result<Notice> {
        self.storage.remove()?;
        self.guests.clear();
        log::info!("Cleared guest data");
        Ok(Notice::Cleared)
    }

    /// Update one guest's status and persist immediately
    pub fn set_status(&mut self, index: usize, status: GuestStatus) -> Result<()> {
        let count = self.guests.len();
        let Some(guest) = self.guests.get_mut(index) else {
            bail!("Guest index {} out of range ({} guests loaded)", index, count);
        };
        log::debug!("Guest {}: {} -> {}", index, guest.status, status);
        guest.status = status;
        self.persist()
    }

    /// Serialize the full list over the previous snapshot
    pub fn persist(&mut self) -> Result<()> {
        let snapshot =
            serde_json::to_string(&self.guests).context("Failed to serialize guest data")?;
        self.storage.write(&snapshot)
    }
}
