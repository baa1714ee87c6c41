//! Persistence of filter criteria across sessions.
//!
//! Criteria live in a single named slot of key-value storage. The trait keeps
//! the backend swappable without touching state-machine logic: the file store
//! here covers desktop deployments, the in-memory store covers tests and
//! ephemeral sessions, and consumers can supply their own backend (embedded
//! KV, platform preference store) by implementing [`CriteriaStore`].

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

use crate::criteria::MemberFilters;

/// File name of the single persisted criteria slot.
const FILTERS_SLOT: &str = "filters.json";

/// Scratch name used to make slot overwrites atomic.
const FILTERS_SLOT_TMP: &str = "filters.json.tmp";

/// Errors returned while persisting filter criteria.
///
/// Only writes can fail loudly; a slot that cannot be *read* is treated as
/// absent so stale or corrupt data never blocks startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The storage directory could not be opened or created.
    #[error("failed to open criteria store: {message}")]
    Open {
        /// Error detail from the filesystem.
        message: String,
    },

    /// The criteria could not be serialised.
    #[error("failed to serialise criteria: {message}")]
    Serialise {
        /// Error detail from the serialiser.
        message: String,
    },

    /// The slot could not be written.
    #[error("failed to write criteria slot: {message}")]
    Write {
        /// Error detail from the filesystem.
        message: String,
    },
}

/// Durable slot holding the last-applied filter criteria.
#[cfg_attr(test, mockall::automock)]
pub trait CriteriaStore: Send + Sync {
    /// Reads previously saved criteria.
    ///
    /// Returns `None` when the slot is absent or its contents cannot be
    /// parsed; a malformed slot never raises.
    fn load(&self) -> Option<MemberFilters>;

    /// Overwrites the slot with the given criteria.
    ///
    /// The write is atomic from the caller's perspective: a subsequent
    /// [`CriteriaStore::load`] observes either the previous value or the new
    /// one, never a partial write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when serialisation or the underlying write
    /// fails.
    fn save(&self, criteria: &MemberFilters) -> Result<(), StoreError>;
}

/// Criteria store backed by a JSON file in a capability-scoped directory.
#[derive(Debug)]
pub struct FileCriteriaStore {
    dir: Dir,
}

impl FileCriteriaStore {
    /// Opens a store rooted at `root`, creating the directory when needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the directory cannot be created or
    /// opened.
    pub fn open(root: &Utf8Path) -> Result<Self, StoreError> {
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(|error| {
            StoreError::Open {
                message: format!("create '{root}': {error}"),
            }
        })?;
        let dir =
            Dir::open_ambient_dir(root, ambient_authority()).map_err(|error| StoreError::Open {
                message: format!("open '{root}': {error}"),
            })?;
        Ok(Self { dir })
    }
}

impl CriteriaStore for FileCriteriaStore {
    fn load(&self) -> Option<MemberFilters> {
        let raw = self.dir.read_to_string(FILTERS_SLOT).ok()?;
        match serde_json::from_str(&raw) {
            Ok(criteria) => Some(criteria),
            Err(error) => {
                tracing::debug!("discarding malformed criteria slot: {error}");
                None
            }
        }
    }

    fn save(&self, criteria: &MemberFilters) -> Result<(), StoreError> {
        let json = serde_json::to_string(criteria).map_err(|error| StoreError::Serialise {
            message: error.to_string(),
        })?;
        self.dir
            .write(FILTERS_SLOT_TMP, json.as_bytes())
            .map_err(|error| StoreError::Write {
                message: format!("write scratch slot: {error}"),
            })?;
        self.dir
            .rename(FILTERS_SLOT_TMP, &self.dir, FILTERS_SLOT)
            .map_err(|error| StoreError::Write {
                message: format!("publish slot: {error}"),
            })
    }
}

/// Criteria store held entirely in memory.
///
/// Values round-trip through the same JSON encoding as the file store, so
/// serialisation behaviour stays identical across backends.
#[derive(Debug, Default)]
pub struct InMemoryCriteriaStore {
    slot: Mutex<Option<String>>,
}

impl InMemoryCriteriaStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CriteriaStore for InMemoryCriteriaStore {
    fn load(&self) -> Option<MemberFilters> {
        let raw = self.lock_slot().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, criteria: &MemberFilters) -> Result<(), StoreError> {
        let json = serde_json::to_string(criteria).map_err(|error| StoreError::Serialise {
            message: error.to_string(),
        })?;
        *self.lock_slot() = Some(json);
        Ok(())
    }
}
