//! Index data structures
//!
//! The index (staging area) maps workspace-relative paths to blob digests.
//! It describes the tree of the next commit.
//!
//! ## File Format
//!
//! ```text
//! {
//!   "dir/file.txt": "<40 hex digest>",
//!   "hello.txt": "<40 hex digest>"
//! }
//! ```
//!
//! Keys are sorted and use `/` as separator; an empty index is `{}`.

pub mod index_entry;
