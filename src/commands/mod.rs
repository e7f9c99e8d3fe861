//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object manipulation (hash-object, cat-file, ls-tree)
//! - `porcelain`: User-facing commands for version control workflows (add, commit, log, etc.)

pub mod plumbing;
pub mod porcelain;
