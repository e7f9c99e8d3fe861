//! Commit history traversal
//!
//! - `revision`: parsing and resolving names such as `HEAD`, `master~2` or an
//!   abbreviated object ID
//! - `rev_list`: lazy walk over the single parent pointer of each commit, one
//!   object read per step, until the root commit

pub mod rev_list;
pub mod revision;
