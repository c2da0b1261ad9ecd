//! Test fixtures for exercising view handles.
//!
//! This module provides instrumented collaborators for tests: a
//! [`ProbeView`] that records how it is closed, and a [`ViewFactory`] that
//! counts productions and can be told to fail. Both are used by this
//! crate's own tests and are exported for downstream test suites.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::{ViewError, ViewResult};
use crate::view::Closeable;

/// A closeable view that records lifecycle interactions.
///
/// Each probe carries the sequence number its factory assigned, so tests
/// can tell apart the first production from a replacement.
#[derive(Debug)]
pub struct ProbeView {
    sequence: usize,
    closed: AtomicBool,
    close_calls: AtomicUsize,
    fail_on_close: bool,
}

impl ProbeView {
    /// Creates an open probe with the given sequence number.
    pub fn new(sequence: usize) -> Self {
        Self {
            sequence,
            closed: AtomicBool::new(false),
            close_calls: AtomicUsize::new(0),
            fail_on_close: false,
        }
    }

    /// Creates a probe whose close reports an I/O failure.
    ///
    /// The close still counts and still transitions the probe to closed;
    /// only the result is a failure, mimicking a backing store that errors
    /// during teardown.
    pub fn failing_on_close() -> Self {
        Self {
            fail_on_close: true,
            ..Self::new(0)
        }
    }

    /// The sequence number assigned at production time.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// How many times `close` has been invoked on this probe.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::Acquire)
    }
}

impl Closeable for ProbeView {
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn close(&self) -> ViewResult<()> {
        self.close_calls.fetch_add(1, Ordering::AcqRel);
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(ViewError::Closed);
        }
        if self.fail_on_close {
            return Err(ViewError::Io(io::Error::new(
                io::ErrorKind::Other,
                "probe close failure",
            )));
        }
        Ok(())
    }
}

/// A producer of [`ProbeView`]s that counts productions.
///
/// Cloning the factory shares its counters, so a test can hand a producer
/// closure to a handle and keep observing it from outside.
#[derive(Debug, Clone, Default)]
pub struct ViewFactory {
    produced: Arc<AtomicUsize>,
    fail_next: Arc<AtomicBool>,
}

impl ViewFactory {
    /// Creates a factory that has produced nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many views this factory has successfully produced.
    pub fn produced(&self) -> usize {
        self.produced.load(Ordering::Acquire)
    }

    /// Makes the next production fail with an I/O error.
    ///
    /// Failed productions do not count towards [`produced`](Self::produced).
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::Release);
    }

    /// Returns a producer closure suitable for
    /// [`LazyView::of`](crate::lazy::LazyView::of).
    pub fn producer(&self) -> impl Fn() -> io::Result<ProbeView> + Send + Sync + 'static {
        let produced = Arc::clone(&self.produced);
        let fail_next = Arc::clone(&self.fail_next);
        move || {
            if fail_next.swap(false, Ordering::AcqRel) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "injected production failure",
                ));
            }
            let sequence = produced.fetch_add(1, Ordering::AcqRel);
            Ok(ProbeView::new(sequence))
        }
    }
}
