//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Object database for storing blobs, trees, and commits
//! - `index`: Staging area tracking the content of the next commit
//! - `refs`: Reference management (HEAD and branches)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;

use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` through a sibling temp file and a rename
///
/// Readers observe either the previous content or the new one, never a torn
/// write. Parent directories are created as needed.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("invalid path {:?}", path))?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory {:?}", parent))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid path {:?}", path))?;
    let temp_path = parent.join(format!(".{file_name}.tmp-{}", rand::random::<u32>()));

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .with_context(|| format!("failed to create temp file {:?}", temp_path))?;
    file.write_all(content)
        .with_context(|| format!("failed to write temp file {:?}", temp_path))?;
    file.sync_all()?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename {:?} to {:?}", temp_path, path))?;

    Ok(())
}
