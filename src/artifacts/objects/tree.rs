//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Tree Building
//!
//! Trees can be built from:
//! - Index entries (staging area), when committing
//! - Existing tree objects, when reading
//!
//! Entries are kept sorted by name, with directory names compared as if they
//! ended in `/`, so a given set of files always serializes to the same bytes.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

/// Entry of a tree under construction
#[derive(Debug, Clone)]
enum TreeEntry {
    /// File entry (blob)
    File(IndexEntry),
    /// Directory entry (nested tree)
    Directory(Tree),
}

impl TreeEntry {
    fn mode(&self) -> EntryMode {
        match self {
            TreeEntry::File(_) => EntryMode::Regular,
            TreeEntry::Directory(_) => EntryMode::Directory,
        }
    }

    fn oid(&self) -> anyhow::Result<ObjectId> {
        match self {
            TreeEntry::File(entry) => Ok(entry.oid.clone()),
            TreeEntry::Directory(tree) => tree.object_id(),
        }
    }
}

/// Tree object representing a directory snapshot
///
/// Trees maintain two sets of entries:
/// - `readable_entries`: for trees loaded from the database
/// - `writeable_entries`: for trees being built from the index
#[derive(Debug, Clone, Default)]
pub struct Tree {
    readable_entries: BTreeMap<String, DatabaseEntry>,
    writeable_entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Build a tree from index entries
    ///
    /// Creates a hierarchical tree structure from a flat list of index entries.
    /// Files are organized into directories matching their path structure.
    pub fn build<'e>(entries: impl Iterator<Item = &'e IndexEntry>) -> anyhow::Result<Self> {
        let mut root = Self::default();

        for entry in entries {
            let parents = entry.parent_dirs();
            root.add_entry(&parents, entry)?;
        }

        Ok(root)
    }

    /// Traverse the tree depth-first, calling a function on each node
    ///
    /// Visits children before parents (post-order traversal): a subtree must be
    /// stored before the tree referencing it.
    pub fn traverse<F>(&self, func: &mut F) -> anyhow::Result<()>
    where
        F: FnMut(&Tree) -> anyhow::Result<()>,
    {
        for entry in self.writeable_entries.values() {
            if let TreeEntry::Directory(tree) = entry {
                tree.traverse(func)?;
            }
        }
        func(self)
    }

    fn add_entry(&mut self, parents: &[&Path], entry: &IndexEntry) -> anyhow::Result<()> {
        match parents.split_first() {
            None => {
                let name = entry.basename()?;
                if let Some(TreeEntry::Directory(_)) = self.writeable_entries.get(name) {
                    anyhow::bail!("{} is both a file and a directory", entry.name.display())
                }

                self.writeable_entries
                    .insert(name.to_string(), TreeEntry::File(entry.clone()));
            }
            Some((parent, rest)) => {
                let parent = parent
                    .file_name()
                    .and_then(|s| s.to_str())
                    .context("Invalid parent")?;

                let tree = match self
                    .writeable_entries
                    .entry(parent.to_string())
                    .or_insert_with(|| TreeEntry::Directory(Tree::default()))
                {
                    TreeEntry::Directory(tree) => tree,
                    TreeEntry::File(file) => {
                        anyhow::bail!("{} is both a file and a directory", file.name.display())
                    }
                };
                tree.add_entry(rest, entry)?;
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.readable_entries.is_empty() && self.writeable_entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.readable_entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.readable_entries.into_iter()
    }

    /// `(name, mode, oid)` triples of whichever entry set the tree holds, in hashing order
    fn listing(&self) -> anyhow::Result<Vec<(String, EntryMode, ObjectId)>> {
        let mut listing = if self.writeable_entries.is_empty() {
            self.readable_entries
                .iter()
                .map(|(name, entry)| (name.clone(), entry.mode, entry.oid.clone()))
                .collect::<Vec<_>>()
        } else {
            self.writeable_entries
                .iter()
                .map(|(name, tree_entry)| Ok((name.clone(), tree_entry.mode(), tree_entry.oid()?)))
                .collect::<anyhow::Result<Vec<_>>>()?
        };
        listing.sort_by_key(|(name, mode, _)| Self::sort_key(name, *mode));

        Ok(listing)
    }

    fn sort_key(name: &str, mode: EntryMode) -> String {
        if mode.is_tree() {
            format!("{name}/")
        } else {
            name.to_string()
        }
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for (name, mode, oid) in self.listing()? {
            write!(content_bytes, "{} {}", mode.as_str(), name)?;
            content_bytes.push(0);
            oid.write_h40_to(&mut content_bytes)?;
        }

        Ok(Bytes::from(content_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(anyhow::anyhow!("unexpected EOF in mode"));
            }
            let mode = EntryMode::from_octal_str(std::str::from_utf8(&mode_bytes)?)?;

            // Read "name\0"
            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(anyhow::anyhow!("unexpected EOF in name"));
            }
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree {
            readable_entries: entries,
            writeable_entries: Default::default(),
        })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.listing()
            .unwrap_or_default()
            .into_iter()
            .map(|(name, mode, oid)| {
                let object_type = if mode.is_tree() {
                    ObjectType::Tree
                } else {
                    ObjectType::Blob
                };

                format!(
                    "{} {} {}\t{}",
                    mode.as_padded_str(),
                    object_type,
                    oid,
                    name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
