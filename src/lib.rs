//! `openview` - lazily-initialized, reusable, closeable file view handles
//!
//! This library wraps an expensive-to-open "file view" behind a thin handle
//! that defers opening until first use, caches the opened view, transparently
//! re-opens it if the cached view was closed out-of-band, and closes exactly
//! once, cascading to whatever view it currently holds.
//!
//! The interesting part is not file access but the concurrency-safe
//! lazy-resource protocol: one mutex guards the whole check-then-produce
//! sequence so concurrent callers never race to open two live views, and a
//! one-shot close protocol makes teardown safe under concurrent close
//! attempts or external closure of the held view.
//!
//! # Overview
//!
//! - [`LazyView`] - the lazy, self-healing, closeable handle.
//! - [`CloseState`] - the one-shot close tracker the handle embeds.
//! - [`Closeable`] / [`FileView`] - the capability traits a wrapped view
//!   implements and the handle forwards.
//! - [`InMemoryFileView`] / [`DirectoryFileView`] - ready-made views.
//! - [`testing`] - instrumented fixtures for downstream test suites.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod close_state;
pub mod directory;
pub mod errors;
pub mod lazy;
pub mod memory;
pub mod testing;
pub mod types;
pub mod view;

pub use close_state::CloseState;
pub use directory::DirectoryFileView;
pub use errors::{ViewError, ViewResult};
pub use lazy::LazyView;
pub use memory::InMemoryFileView;
pub use types::EntryPath;
pub use view::{Closeable, FileView};
