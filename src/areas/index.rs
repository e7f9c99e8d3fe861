//! Index (staging area)
//!
//! The index tracks which files should be included in the next commit: a
//! mapping from workspace-relative path to the digest of the staged blob.
//!
//! ## Index File Format
//!
//! The index file is a pretty-printed JSON object sorted by path:
//!
//! ```text
//! {
//!   "hello.txt": "557db03de997c86a4a028e1ebd3a1ceb225be238"
//! }
//! ```
//!
//! ## Data Structures
//!
//! - `entries`: Maps file paths to their index entries
//! - `children`: Maps directory paths to the tracked files below them

use crate::areas::write_atomically;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// On-disk shape of the index
type IndexFile = BTreeMap<String, ObjectId>;

/// Index (staging area)
///
/// Tracks files staged for the next commit. The index is loaded and saved
/// wholesale: a save replaces the whole file.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minigit/index`)
    path: Box<Path>,
    /// Tracked files mapped by path
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Directory hierarchy for efficient parent-child lookups
    children: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (typically `.minigit/index`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            children: BTreeMap::new(),
            changed: false,
        }
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up an entry by its path
    ///
    /// # Returns
    ///
    /// The index entry if found, None otherwise
    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    /// Clear all entries from the index
    fn clear(&mut self) {
        self.entries.clear();
        self.children.clear();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// A missing index file loads as an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        let content = match std::fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Unable to read index file {:?}", self.path()));
            }
        };

        if content.trim().is_empty() {
            return Ok(());
        }

        let index_file: IndexFile = serde_json::from_str(&content)
            .with_context(|| format!("Index file {:?} is corrupt", self.path()))?;

        for (name, oid) in index_file {
            self.store_entry(&IndexEntry::new(PathBuf::from(name), oid));
        }

        tracing::trace!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    /// Check if a path is tracked directly in the index
    ///
    /// Returns true if the path is either a file entry or has children
    /// (is a directory with tracked files).
    pub fn is_directly_tracked(&self, path: &Path) -> bool {
        self.entries.contains_key(path) || self.children.contains_key(path)
    }

    /// Check if a path is a directory holding tracked files
    pub fn is_tracked_directory(&self, path: &Path) -> bool {
        self.children.contains_key(path)
    }

    /// Remove any conflicting entries before adding a new entry
    ///
    /// Removes parent directories that might be file entries, and
    /// removes any children entries if this entry is becoming a file.
    fn discard_conflicts(&mut self, entry: &IndexEntry) {
        for parent in entry.parent_dirs() {
            self.remove_entry(parent);
        }
        self.remove_children(&entry.name);
    }

    fn store_entry(&mut self, entry: &IndexEntry) {
        for parent in entry.parent_dirs() {
            self.children
                .entry(parent.to_path_buf())
                .or_default()
                .insert(entry.name.clone());
        }

        self.entries.insert(entry.name.clone(), entry.clone());
    }

    fn remove_children(&mut self, path_name: &Path) {
        if let Some(children) = self.children.remove(path_name) {
            for child in children {
                self.remove_entry(&child);
            }
        }
    }

    fn remove_entry(&mut self, path_name: &Path) {
        if let Some(entry) = self.entries.remove(path_name) {
            for parent in entry.parent_dirs() {
                if let Some(children) = self.children.get_mut(parent) {
                    children.remove(path_name);
                    if children.is_empty() {
                        self.children.remove(parent);
                    }
                }
            }
            self.changed = true;
        }
    }

    /// Stage a file, replacing whatever was staged at that path
    pub fn add(&mut self, entry: IndexEntry) {
        if self.entries.get(&entry.name).map(|e| &e.oid) == Some(&entry.oid) {
            return;
        }

        self.discard_conflicts(&entry);
        self.store_entry(&entry);

        self.changed = true;
    }

    /// Unstage a file, or every file under a directory; unknown paths are ignored
    pub fn remove(&mut self, path: &Path) {
        self.remove_entry(path);
        self.remove_children(path);
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Save the index, replacing the file on disk in one step
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let index_file = self
            .entries
            .values()
            .map(|entry| {
                let name = entry
                    .name
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid entry name {:?}", entry.name))?;
                Ok((name.to_string(), entry.oid.clone()))
            })
            .collect::<anyhow::Result<IndexFile>>()?;

        let mut content = serde_json::to_string_pretty(&index_file)?;
        content.push('\n');
        write_atomically(self.path(), content.as_bytes())?;

        tracing::debug!(entries = self.entries.len(), "saved index");
        self.changed = false;

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn into_entries(self) -> impl Iterator<Item = IndexEntry> {
        self.entries.into_values()
    }
}
