//! Core types for `openview`.
//!
//! Types here use smart constructors so that validity is established at
//! construction time, following the "parse, don't validate" principle.

use nutype::nutype;

/// The root-relative path of an entry inside a file view.
///
/// `EntryPath` values are guaranteed to be non-empty after trimming and to
/// stay inside the view root: absolute paths, `.`/`..` segments, empty
/// segments, and backslashes are rejected at construction, so a valid
/// `EntryPath` can never address anything outside the view.
///
/// Paths are interpreted relative to the view's root and use `/` as the
/// separator regardless of platform, so the same path addresses the same
/// entry in an in-memory view and a directory-backed view.
#[nutype(
    sanitize(trim),
    validate(not_empty, predicate = |path: &str| is_root_relative(path)),
    derive(
        Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, Deref, Display
    )
)]
pub struct EntryPath(String);

/// A path stays inside the root iff it is relative and every `/`-separated
/// segment is a plain name.
fn is_root_relative(path: &str) -> bool {
    !path.starts_with('/')
        && !path.contains('\\')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
