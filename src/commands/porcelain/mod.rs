//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit (and `rm` to unstage them)
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `diff`: Show changes between HEAD, the index and the working tree
//! - `log`: Show commit history

pub mod add;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod status;
