//! JSON file persistence for [`InventoryStore`].
//!
//! The file is a single JSON object mapping item names to numbers, written
//! with two-space indentation in the store's iteration order. Both directions
//! scope the file handle to the call, so it is closed on every exit path.

use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use stockroom_core::{ItemName, Quantity};

use crate::store::InventoryStore;

/// Path used when the caller does not configure one.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("file '{}' not found; starting with empty inventory", .path.display())]
    NotFound { path: PathBuf },

    #[error("could not decode inventory from '{}': {reason}; starting with empty inventory", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    pub fn path(&self) -> &Path {
        match self {
            PersistenceError::NotFound { path }
            | PersistenceError::Malformed { path, .. }
            | PersistenceError::Io { path, .. } => path,
        }
    }
}

impl InventoryStore {
    /// Replace the whole inventory with the contents of `path`.
    ///
    /// On any failure the inventory is reset to empty and the error is
    /// returned for the caller to report; the store stays usable. Entries
    /// with a quantity of zero or below are dropped while loading.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        match read_items(path) {
            Ok(items) => {
                self.items = items;
                tracing::info!(path = %path.display(), items = self.items.len(), "inventory loaded");
                Ok(self.items.len())
            }
            Err(err) => {
                self.items.clear();
                tracing::warn!("inventory load failed: {err}");
                Err(err)
            }
        }
    }

    /// Write the whole inventory to `path`, overwriting any existing file.
    ///
    /// A failed write leaves the in-memory inventory untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.items)
            .map_err(|e| io_err(io::Error::from(e)))?;
        writer.flush().map_err(io_err)?;

        tracing::info!(path = %path.display(), items = self.items.len(), "inventory saved");
        Ok(())
    }
}

fn read_items(path: &Path) -> Result<IndexMap<ItemName, Quantity>, PersistenceError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PersistenceError::NotFound {
            path: path.to_path_buf(),
        },
        // Non-UTF-8 content is a decoding problem, not an I/O one.
        ErrorKind::InvalidData => PersistenceError::Malformed {
            path: path.to_path_buf(),
            reason: source.to_string(),
        },
        _ => PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let raw: IndexMap<ItemName, Quantity> =
        serde_json::from_str(&text).map_err(|e| PersistenceError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut items = IndexMap::with_capacity(raw.len());
    for (item, qty) in raw {
        if qty.is_positive() {
            items.insert(item, qty);
        } else {
            tracing::warn!(item = %item, quantity = %qty, "dropping non-positive entry from file");
        }
    }
    Ok(items)
}
