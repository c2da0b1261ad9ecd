//! In-memory file view.
//!
//! [`InMemoryFileView`] keeps its entries in a map and is useful for tests
//! and development scenarios where no backing store is wanted. It honors
//! the full closeable contract: one-shot close, and every operation fails
//! once closed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::errors::{ViewError, ViewResult};
use crate::types::EntryPath;
use crate::view::{Closeable, FileView};

/// Thread-safe in-memory file view.
///
/// # Example
///
/// ```rust
/// use openview::{EntryPath, FileView, InMemoryFileView};
///
/// let view = InMemoryFileView::new();
/// let path = EntryPath::try_new("data/config.json").unwrap();
/// view.insert(path.clone(), b"{}".to_vec()).unwrap();
///
/// assert!(view.contains(&path).unwrap());
/// assert_eq!(view.read(&path).unwrap(), b"{}");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryFileView {
    entries: RwLock<HashMap<EntryPath, Vec<u8>>>,
    closed: AtomicBool,
}

impl InMemoryFileView {
    /// Creates a new empty open view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open view populated from `entries`.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EntryPath, Vec<u8>)>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
            closed: AtomicBool::new(false),
        }
    }

    /// Inserts or replaces the entry at `path`.
    ///
    /// Fails with [`ViewError::Closed`] if the view was closed.
    pub fn insert(&self, path: EntryPath, contents: Vec<u8>) -> ViewResult<()> {
        self.ensure_open()?;
        self.entries.write().insert(path, contents);
        Ok(())
    }

    fn ensure_open(&self) -> ViewResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ViewError::Closed);
        }
        Ok(())
    }
}

impl Closeable for InMemoryFileView {
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn close(&self) -> ViewResult<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(ViewError::Closed);
        }
        Ok(())
    }
}

impl FileView for InMemoryFileView {
    fn read(&self, path: &EntryPath) -> ViewResult<Vec<u8>> {
        self.ensure_open()?;
        self.entries
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| ViewError::EntryNotFound(path.clone()))
    }

    fn contains(&self, path: &EntryPath) -> ViewResult<bool> {
        self.ensure_open()?;
        Ok(self.entries.read().contains_key(path))
    }

    fn entries(&self) -> ViewResult<Vec<EntryPath>> {
        self.ensure_open()?;
        Ok(self.entries.read().keys().cloned().collect())
    }
}
