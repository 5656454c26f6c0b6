use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::entry::Entry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store {path}: {source}")]
    Read { source: io::Error, path: PathBuf },
    #[error("Store {path} is not a valid entry list: {source}")]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("Failed to encode entries: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write store {path}: {source}")]
    Write { source: io::Error, path: PathBuf },
}

/// Reads the persisted collection. A missing file is an empty store.
pub async fn load(path: &Path) -> Result<Vec<Entry>, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store yet");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                source,
                path: path.to_path_buf(),
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        source,
        path: path.to_path_buf(),
    })
}

/// Overwrites the file with the whole collection, pretty printed.
pub async fn save_all(path: &Path, entries: &[Entry]) -> Result<(), StoreError> {
    let encoded = serde_json::to_vec_pretty(entries)?;
    tokio::fs::write(path, encoded)
        .await
        .map_err(|source| StoreError::Write {
            source,
            path: path.to_path_buf(),
        })
}

/// The in-memory collection and its backing file.
///
/// Every mutation holds the lock from reading the current collection until
/// the new one is on disk, so concurrent requests cannot persist a stale
/// copy over each other. A failed write leaves memory untouched.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Mutex<Vec<Entry>>,
}

impl EntryStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = load(&path).await?;
        info!(path = %path.display(), count = entries.len(), "store loaded");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub async fn snapshot(&self) -> Vec<Entry> {
        self.entries.lock().await.clone()
    }

    /// Appends `new` in order and persists. Returns the new total.
    pub async fn append(&self, new: Vec<Entry>) -> Result<usize, StoreError> {
        let mut current = self.entries.lock().await;
        let mut next = Vec::with_capacity(current.len() + new.len());
        next.extend(current.iter().cloned());
        next.extend(new);

        save_all(&self.path, &next).await?;
        *current = next;
        Ok(current.len())
    }

    /// Drops every entry titled exactly `title` and persists. Returns how
    /// many were removed.
    pub async fn remove_by_title(&self, title: &str) -> Result<usize, StoreError> {
        let mut current = self.entries.lock().await;
        let next: Vec<Entry> = current
            .iter()
            .filter(|entry| entry.title() != title)
            .cloned()
            .collect();
        let removed = current.len() - next.len();

        save_all(&self.path, &next).await?;
        *current = next;
        Ok(removed)
    }
}
