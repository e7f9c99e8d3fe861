//! minigit: a small content-addressable version control engine
//!
//! The crate is organized the same way the on-disk repository is:
//!
//! - `areas`: the persistent parts of a repository (object database, index,
//!   refs, workspace) and the `Repository` that ties them together
//! - `artifacts`: the data types and algorithms operating on those areas
//!   (objects, status inspection, diffing, history traversal)
//! - `commands`: user-facing operations implemented on `Repository`
//! - `errors`: the error taxonomy surfaced to callers
//! - `telemetry`: tracing subscriber setup for the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod telemetry;

/// Name of the repository directory created inside the workspace
pub const REPOSITORY_DIR: &str = ".minigit";

/// Branch HEAD points at in a freshly initialized repository
pub const DEFAULT_BRANCH: &str = "master";
