//! One-shot close tracking shared by closeable components.
//!
//! [`CloseState`] is a two-state machine: **Open** (initial) and **Closed**
//! (terminal), with a single Open→Closed transition. It guarantees "closed
//! exactly once" and "no use after close" for whatever embeds it.
//!
//! The tracker is deliberately not synchronized. It carries no lock of its
//! own; the embedding component decides the synchronization strategy around
//! the flip (see [`LazyView`](crate::lazy::LazyView), which keeps the
//! tracker behind the same mutex as its cache slot).

use crate::errors::{ViewError, ViewResult};

/// Tracks whether a handle has been closed.
///
/// # Example
///
/// ```rust
/// use openview::CloseState;
///
/// let mut state = CloseState::new();
/// assert!(state.ensure_open().is_ok());
///
/// state.close().unwrap();
/// assert!(state.ensure_open().is_err());
/// assert!(state.close().is_err()); // one-shot: a second close is an error
/// ```
#[derive(Debug, Default)]
pub struct CloseState {
    closed: bool,
}

impl CloseState {
    /// Creates a new tracker in the Open state.
    pub const fn new() -> Self {
        Self { closed: false }
    }

    /// Returns whether the Open→Closed transition has happened.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fails with [`ViewError::Closed`] if the handle was already closed.
    ///
    /// No side effects; callers run this before every operation that is
    /// only legal on an open handle.
    pub fn ensure_open(&self) -> ViewResult<()> {
        if self.closed {
            return Err(ViewError::Closed);
        }
        Ok(())
    }

    /// Performs the one-shot Open→Closed transition.
    ///
    /// Fails with [`ViewError::Closed`] on a second call. The flip completes
    /// before any resource teardown runs, so callers can sequence
    /// "flip, then tear down" and be certain teardown runs at most once.
    pub fn close(&mut self) -> ViewResult<()> {
        if self.closed {
            return Err(ViewError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}
