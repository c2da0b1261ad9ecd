//! Error types for `openview`.
//!
//! The error design follows two hard rules:
//!
//! - **Illegal-state failures are surfaced, not tolerated**: using a handle
//!   after it was closed, or closing it twice, is a lifecycle-usage bug in
//!   the caller and always returns [`ViewError::Closed`] immediately.
//! - **I/O failures pass through unchanged**: acquisition and backing-store
//!   errors are propagated to the immediate caller with no retry, no
//!   wrapping beyond the enum variant, and no logging.

use crate::types::{EntryPath, EntryPathError};
use thiserror::Error;

/// Errors that can occur while working with file views and view handles.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The handle (or the view behind it) was already closed.
    ///
    /// Returned both for use-after-close and for a second `close` call.
    /// Closing is one-shot: a repeated close is a hard usage error, not a
    /// no-op, so callers must centralize close ownership.
    #[error("file view is already closed")]
    Closed,

    /// The view has no entry at the requested path.
    #[error("entry not found in view: {0}")]
    EntryNotFound(EntryPath),

    /// A path failed [`EntryPath`] validation.
    #[error("invalid entry path: {0}")]
    InvalidPath(#[from] EntryPathError),

    /// An I/O failure from view acquisition or from the backing store,
    /// passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Type alias for view operation results.
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_error_display() {
        let error = ViewError::Closed;
        assert_eq!(error.to_string(), "file view is already closed");
    }

    #[test]
    fn test_io_error_passes_through_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ViewError::from(io);
        match error {
            ViewError::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Io variant, got: {other:?}"),
        }
    }

    #[test]
    fn test_entry_not_found_names_the_path() {
        let path = EntryPath::try_new("META-INF/MANIFEST.MF").unwrap();
        let error = ViewError::EntryNotFound(path);
        assert!(error.to_string().contains("META-INF/MANIFEST.MF"));
    }
}
