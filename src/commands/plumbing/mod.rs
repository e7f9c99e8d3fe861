//! Plumbing commands (low-level object operations)
//!
//! Direct access to the object database, mostly useful for scripting and for
//! inspecting what the porcelain commands wrote.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob ID and optionally store the blob
//! - `cat-file`: Print the content or the kind of an object
//! - `ls-tree`: List the contents of a tree object

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
