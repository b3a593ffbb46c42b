use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StoreError;
use crate::model::FavoriteEntry;

/// Persistence seam for the favorites list.
///
/// The whole list is written as one snapshot on every mutation and read
/// once at startup; there is no partial update.
pub trait SnapshotStore {
    fn load(&self) -> Result<Vec<FavoriteEntry>, StoreError>;
    fn save(&mut self, entries: &[FavoriteEntry]) -> Result<(), StoreError>;
}

/// Snapshot store backed by a JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Vec<FavoriteEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&mut self, entries: &[FavoriteEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory snapshot store, mainly for tests.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Vec<FavoriteEntry>,
    pub save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &[FavoriteEntry] {
        &self.snapshot
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Vec<FavoriteEntry>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, entries: &[FavoriteEntry]) -> Result<(), StoreError> {
        self.snapshot = entries.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

/// Outcome of a favorite toggle. Whichever view is currently active must be
/// refreshed by the caller afterwards; the store never renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Toggle {
    Added,
    Removed,
}

/// In-memory favorites list, mirrored to a [`SnapshotStore`] on every
/// mutation. At most one entry per recipe id, kept in insertion order.
pub struct FavoritesStore<S: SnapshotStore> {
    entries: Vec<FavoriteEntry>,
    backend: S,
}

impl<S: SnapshotStore> FavoritesStore<S> {
    /// Open the store, reading the persisted snapshot once. A missing or
    /// unreadable snapshot starts the list empty rather than failing.
    pub fn open(backend: S) -> Self {
        let entries = match backend.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("could not read favorites snapshot, starting empty: {err}");
                Vec::new()
            }
        };
        FavoritesStore { entries, backend }
    }

    /// Add the entry, or remove it if one with the same id is already saved,
    /// then persist the full list.
    ///
    /// The in-memory list and the persisted snapshot agree whenever this
    /// returns: a failed write rolls the in-memory change back.
    pub fn toggle(&mut self, entry: FavoriteEntry) -> Result<Toggle, StoreError> {
        let toggle = match self.entries.iter().position(|f| f.id == entry.id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                if let Err(err) = self.backend.save(&self.entries) {
                    self.entries.insert(index, removed);
                    return Err(err);
                }
                Toggle::Removed
            }
            None => {
                self.entries.push(entry);
                if let Err(err) = self.backend.save(&self.entries) {
                    self.entries.pop();
                    return Err(err);
                }
                Toggle::Added
            }
        };

        debug!(
            "favorites: {:?}, list now holds {} entries",
            toggle,
            self.entries.len()
        );
        Ok(toggle)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|f| f.id == id)
    }

    /// Saved entries in insertion order.
    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
