//! Lazily-initialized, reusable, closeable view handles.
//!
//! [`LazyView`] wraps a producer that knows how to open a fresh view, and
//! defers invoking it until the first access. The produced view is cached
//! and reused on later accesses; if some other holder closes the cached
//! view out-of-band, the handle heals itself by producing a replacement on
//! the next access. The handle itself closes exactly once, and closing it
//! cascades to whatever view it currently holds.
//!
//! One mutex guards the whole check-then-produce sequence, so concurrent
//! callers can never race to open two live views: at most one production is
//! in flight per handle, and its result is visible to every waiter.
//!
//! # Example
//!
//! ```rust
//! use openview::{Closeable, EntryPath, FileView, InMemoryFileView, LazyView, ViewResult};
//!
//! fn main() -> ViewResult<()> {
//!     let handle = LazyView::of(|| {
//!         let greeting = EntryPath::try_new("greeting.txt").unwrap();
//!         Ok(InMemoryFileView::from_entries([(greeting, b"hello".to_vec())]))
//!     });
//!
//!     // The producer runs on first access; later accesses reuse the view.
//!     let path = EntryPath::try_new("greeting.txt").unwrap();
//!     assert_eq!(handle.read(&path)?, b"hello");
//!     assert_eq!(handle.read(&path)?, b"hello");
//!
//!     handle.close()?;
//!     assert!(handle.read(&path).is_err());
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::close_state::CloseState;
use crate::errors::ViewResult;
use crate::types::EntryPath;
use crate::view::{Closeable, FileView};

/// State behind the handle's mutex.
///
/// The closed flag and the cache slot live under one lock so `close` and
/// `current` are mutually exclusive: a production can never land after
/// teardown, and the flag and slot are never observed out of sync.
struct Inner<V> {
    state: CloseState,
    cached: Option<Arc<V>>,
}

/// A lazy, self-healing, one-shot-closeable handle onto a view.
///
/// Construction never invokes the producer. Each access resolves "the
/// current view": the cached instance if it is still open, otherwise a
/// fresh one from the producer. See [`LazyView::current`].
///
/// `LazyView` implements [`Closeable`] itself, and implements [`FileView`]
/// whenever the wrapped view does, by resolving the current view and
/// delegating - a holder of the handle uses it exactly like a raw view.
pub struct LazyView<V, P> {
    producer: P,
    inner: Mutex<Inner<V>>,
}

impl<V, P> LazyView<V, P>
where
    V: Closeable,
    P: Fn() -> io::Result<V>,
{
    /// Creates a handle over `producer` without invoking it.
    ///
    /// The producer must be safe to invoke multiple times over the handle's
    /// lifetime - once per production - each time yielding an independently
    /// closeable view.
    pub fn of(producer: P) -> Self {
        Self {
            producer,
            inner: Mutex::new(Inner {
                state: CloseState::new(),
                cached: None,
            }),
        }
    }

    /// Resolves the current live view, producing one if needed.
    ///
    /// Fails with [`ViewError::Closed`](crate::errors::ViewError::Closed)
    /// if the handle was closed, with no side effects. Otherwise, under the
    /// handle's mutex: reuses the cached view if it is present and still
    /// open, or invokes the producer, caches the fresh view, and returns it.
    /// A producer failure propagates unchanged and caches nothing, so the
    /// next call simply tries again.
    ///
    /// Blocks while a concurrent caller holds the mutex, including for the
    /// full duration of that caller's production.
    pub fn current(&self) -> ViewResult<Arc<V>> {
        let mut inner = self.inner.lock();
        inner.state.ensure_open()?;

        if let Some(view) = &inner.cached {
            if !view.is_closed() {
                return Ok(Arc::clone(view));
            }
            tracing::debug!("cached view was closed externally, producing a replacement");
        } else {
            tracing::debug!("no view cached yet, producing one");
        }

        let fresh = Arc::new((self.producer)()?);
        inner.cached = Some(Arc::clone(&fresh));
        Ok(fresh)
    }
}

impl<V, P> Closeable for LazyView<V, P>
where
    V: Closeable,
    P: Fn() -> io::Result<V>,
{
    fn is_closed(&self) -> bool {
        self.inner.lock().state.is_closed()
    }

    /// Closes the handle, cascading to the cached view if one is held.
    ///
    /// A cached view that was already closed out-of-band is only discarded,
    /// never re-closed: its one-shot close already happened elsewhere, and a
    /// first close of the handle must not surface a lifecycle error for it.
    /// The cache slot is cleared before a failure from the view's own close
    /// propagates, so the handle never retains a half-closed view.
    fn close(&self) -> ViewResult<()> {
        let mut inner = self.inner.lock();
        inner.state.close()?;
        if let Some(view) = inner.cached.take() {
            if !view.is_closed() {
                tracing::debug!("closing cached view");
                view.close()?;
            }
        }
        Ok(())
    }
}

impl<V, P> FileView for LazyView<V, P>
where
    V: FileView,
    P: Fn() -> io::Result<V>,
{
    fn read(&self, path: &EntryPath) -> ViewResult<Vec<u8>> {
        self.current()?.read(path)
    }

    fn contains(&self, path: &EntryPath) -> ViewResult<bool> {
        self.current()?.contains(path)
    }

    fn entries(&self) -> ViewResult<Vec<EntryPath>> {
        self.current()?.entries()
    }
}

impl<V, P> fmt::Debug for LazyView<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("LazyView")
            .field("closed", &inner.state.is_closed())
            .field("cached", &inner.cached.is_some())
            .finish_non_exhaustive()
    }
}
