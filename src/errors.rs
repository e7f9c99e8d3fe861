//! Error taxonomy
//!
//! Operations return `anyhow::Result` and attach context to I/O failures.
//! Failures callers are expected to react to are raised as [`RepositoryError`]
//! values, so they can be recovered with `anyhow::Error::downcast_ref`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No object with the requested digest exists in the object database.
    #[error("object {oid} not found")]
    ObjectNotFound { oid: String },

    /// The stored bytes of an object do not match its digest or cannot be decoded.
    #[error("object {oid} is corrupt: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// A working tree path requested for staging does not exist.
    #[error("pathspec '{}' did not match any files", path.display())]
    FileNotFound { path: PathBuf },

    /// A reference is malformed or its symbolic target is dangling.
    #[error("broken reference {name}: {reason}")]
    BrokenReference { name: String, reason: String },

    /// A commit was requested while the index is empty.
    #[error("nothing to commit (empty index)")]
    NothingToCommit,

    /// The repository directory has not been created by `init`.
    #[error("not a minigit repository: {} (run 'minigit init' first)", path.display())]
    RepositoryNotInitialized { path: PathBuf },

    #[error("short object ID {prefix} is ambiguous")]
    AmbiguousObjectId { prefix: String },

    #[error("invalid object ID: {value}")]
    InvalidObjectId { value: String },
}
