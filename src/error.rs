//! Errors returned by [`Cursor`][crate::Cursor] accessors.

use thiserror::Error;

/// Things that can go wrong when reading through a cursor.
///
/// Inserting a key that is already present is *not* an error. [`Tree::insert`][crate::Tree::insert]
/// simply returns `false` in that case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor is past-the-end and has no key to read. Compare against
    /// [`Tree::end`][crate::Tree::end] (or use [`Cursor::is_end`][crate::Cursor::is_end])
    /// before dereferencing.
    #[error("dereferenced a past-the-end cursor")]
    InvalidDereference,
}

/// A `Result` using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
