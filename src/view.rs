//! Capability traits for file views.
//!
//! [`Closeable`] is the lifecycle contract every view carries; [`FileView`]
//! adds the domain operations a view exposes over its backing store. The
//! lazy handle in [`crate::lazy`] forwards this whole capability set by
//! explicit delegation, so callers holding a handle cannot distinguish it
//! from holding a raw view.

use crate::errors::ViewResult;
use crate::types::EntryPath;

/// A handle that can be closed exactly once and queried for its state.
///
/// `close` takes `&self`: views are routinely shared (the lazy handle hands
/// out `Arc`s), and any holder may close a view out-of-band. Implementations
/// use interior mutability for their closed flag.
pub trait Closeable {
    /// Returns whether this handle has been closed. No side effects.
    fn is_closed(&self) -> bool;

    /// Closes this handle.
    ///
    /// Closing is one-shot: a second call fails with
    /// [`ViewError::Closed`](crate::errors::ViewError::Closed). After a
    /// successful close, [`is_closed`](Closeable::is_closed) reports true
    /// and every other operation on the handle fails.
    fn close(&self) -> ViewResult<()>;
}

/// Read access to a tree of named entries over some backing store.
///
/// All operations fail with
/// [`ViewError::Closed`](crate::errors::ViewError::Closed) once the view is
/// closed.
pub trait FileView: Closeable {
    /// Reads the full contents of the entry at `path`.
    ///
    /// Fails with [`ViewError::EntryNotFound`](crate::errors::ViewError::EntryNotFound)
    /// if the view has no such entry.
    fn read(&self, path: &EntryPath) -> ViewResult<Vec<u8>>;

    /// Returns whether the view has an entry at `path`.
    fn contains(&self, path: &EntryPath) -> ViewResult<bool>;

    /// Lists the paths of all entries in the view.
    ///
    /// Ordering is implementation-defined.
    fn entries(&self) -> ViewResult<Vec<EntryPath>>;
}
