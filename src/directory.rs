//! Directory-backed file view.
//!
//! [`DirectoryFileView`] exposes the files under a root directory as view
//! entries. Paths are root-relative and `/`-separated regardless of
//! platform.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::{ViewError, ViewResult};
use crate::types::EntryPath;
use crate::view::{Closeable, FileView};

/// A file view rooted at a filesystem directory.
#[derive(Debug)]
pub struct DirectoryFileView {
    root: PathBuf,
    closed: AtomicBool,
}

impl DirectoryFileView {
    /// Opens a view over the directory at `root`.
    ///
    /// Fails with an I/O error if `root` does not exist or is not a
    /// directory.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }
        Ok(Self {
            root,
            closed: AtomicBool::new(false),
        })
    }

    /// The root directory this view reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_open(&self) -> ViewResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ViewError::Closed);
        }
        Ok(())
    }

    fn resolve(&self, path: &EntryPath) -> PathBuf {
        let mut resolved = self.root.clone();
        for segment in path.as_ref().split('/') {
            resolved.push(segment);
        }
        resolved
    }

    fn walk(&self, dir: &Path, found: &mut Vec<EntryPath>) -> ViewResult<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let entry_path = entry.path();
            if entry.file_type()?.is_dir() {
                self.walk(&entry_path, found)?;
            } else {
                let relative = entry_path
                    .strip_prefix(&self.root)
                    .map_err(|_| {
                        io::Error::new(io::ErrorKind::Other, "entry escaped the view root")
                    })?
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                found.push(EntryPath::try_new(relative)?);
            }
        }
        Ok(())
    }
}

impl Closeable for DirectoryFileView {
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

impl FileView for DirectoryFileView {
    fn read(&self, path: &EntryPath) -> ViewResult<Vec<u8>> {
        self.ensure_open()?;
        match fs::read(self.resolve(path)) {
            Ok(contents) => Ok(contents),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                Err(ViewError::EntryNotFound(path.clone()))
            }
            Err(error) => Err(error.into()),
        }
    }

    fn contains(&self, path: &EntryPath) -> ViewResult<bool> {
        self.ensure_open()?;
        Ok(self.resolve(path).is_file())
    }

    fn entries(&self) -> ViewResult<Vec<EntryPath>> {
        self.ensure_open()?;
        let mut found = Vec::new();
        self.walk(&self.root, &mut found)?;
        Ok(found)
    }
}
