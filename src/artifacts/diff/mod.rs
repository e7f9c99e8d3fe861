//! Diff algorithms and snapshot comparison
//!
//! - `myers`: Myers' diff for line-by-line comparison, grouped into hunks
//! - `diff_target`: one side of a file diff (stored blob, working tree file, or nothing)
//! - `tree_diff`: recursive comparison of two stored trees
//! - `file_diff`: the per-path result handed to callers and printers

pub mod diff_target;
pub mod file_diff;
pub mod myers;
pub mod tree_diff;
