//! Data structures and algorithms operating on the repository areas
//!
//! - `database`: Entries of stored trees
//! - `diff`: Myers' diff, tree comparison and per-file diffs
//! - `index`: Index entry type
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, tree, commit)
//! - `status`: Working tree status inspection

pub mod database;
pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
