//! Object database
//!
//! Content-addressable store for blobs, trees and commits. Each object lives at
//! `objects/<first 2 hex>/<remaining 38 hex>`, zlib compressed.
//!
//! Objects are immutable: writing an object that is already present leaves the
//! existing file untouched, and reads verify that the stored bytes still hash
//! to the requested digest.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{
    Object, ObjectBox, Unpackable, canonical_encoding, digest_of,
};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Flattened snapshot: workspace-relative file path to the blob it points at
pub type TreeSnapshot = BTreeMap<PathBuf, DatabaseEntry>;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store a payload under its digest, returning the digest
    ///
    /// Idempotent: an object file that already exists is never rewritten.
    pub fn put(&self, object_type: ObjectType, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = digest_of(object_type, payload)?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;

        self.write_object(&object_path, canonical_encoding(object_type, payload))?;
        tracing::debug!(oid = %object_id, kind = %object_type, size = payload.len(), "stored object");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(object.object_type(), &object.serialize()?)
    }

    /// Load the kind and payload of an object, verifying its integrity
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<(ObjectType, Bytes)> {
        let object_path = self.path.join(object_id.to_path());

        let compressed = match std::fs::read(&object_path) {
            Ok(compressed) => compressed,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::ObjectNotFound {
                    oid: object_id.to_string(),
                }
                .into());
            }
            Err(error) => {
                return Err(error).context(format!(
                    "Unable to read object file {}",
                    object_path.display()
                ));
            }
        };

        let corrupt = |reason: String| RepositoryError::CorruptObject {
            oid: object_id.to_string(),
            reason,
        };

        let content = Self::decompress(&compressed).map_err(|e| corrupt(e.to_string()))?;
        let mut reader = Cursor::new(content);
        let (object_type, size) =
            ObjectType::parse_header(&mut reader).map_err(|e| corrupt(e.to_string()))?;

        let offset = reader.position() as usize;
        let payload = reader.into_inner().slice(offset..);
        if payload.len() != size {
            return Err(corrupt(format!(
                "header declares {size} bytes but payload has {}",
                payload.len()
            ))
            .into());
        }

        if &digest_of(object_type, &payload)? != object_id {
            return Err(corrupt("content does not match its digest".to_string()).into());
        }

        Ok((object_type, payload))
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, payload) = self.get(object_id)?;
        let object_reader = Cursor::new(payload);

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        match self.get(object_id)? {
            (ObjectType::Blob, payload) => Ok(Some(Blob::deserialize(Cursor::new(payload))?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tree>> {
        match self.get(object_id)? {
            (ObjectType::Tree, payload) => Ok(Some(
                Tree::deserialize(Cursor::new(payload)).map_err(|e| {
                    RepositoryError::CorruptObject {
                        oid: object_id.to_string(),
                        reason: e.to_string(),
                    }
                })?,
            )),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.get(object_id)? {
            (ObjectType::Commit, payload) => Ok(Some(
                Commit::deserialize(Cursor::new(payload)).map_err(|e| {
                    RepositoryError::CorruptObject {
                        oid: object_id.to_string(),
                        reason: e.to_string(),
                    }
                })?,
            )),
            _ => Ok(None),
        }
    }

    /// Tree a tree-ish points at: the tree itself, or the tree of a commit
    pub fn peel_to_tree(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        match self.parse_object(object_id)? {
            ObjectBox::Tree(_) => Ok(Some(object_id.clone())),
            ObjectBox::Commit(commit) => Ok(Some(commit.tree_oid().clone())),
            ObjectBox::Blob(_) => Ok(None),
        }
    }

    /// Expand a stored tree into every file path it contains
    ///
    /// Walks subtrees with an explicit stack, so deep hierarchies don't grow
    /// the call stack.
    pub fn flatten_tree(&self, tree_oid: &ObjectId) -> anyhow::Result<TreeSnapshot> {
        let mut snapshot = TreeSnapshot::new();
        let mut pending = vec![(PathBuf::new(), tree_oid.clone())];

        while let Some((prefix, oid)) = pending.pop() {
            let tree = self
                .parse_object_as_tree(&oid)?
                .ok_or_else(|| RepositoryError::CorruptObject {
                    oid: oid.to_string(),
                    reason: "expected a tree".to_string(),
                })?;

            for (name, entry) in tree.into_entries() {
                let path = prefix.join(name);
                if entry.is_tree() {
                    pending.push((path, entry.oid));
                } else {
                    snapshot.insert(path, entry);
                }
            }
        }

        Ok(snapshot)
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        // compress the object content
        let object_content = Self::compress(&object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// This method searches the object database for all objects whose OID begins
    /// with the specified prefix. It's used to resolve abbreviated OIDs to their
    /// full form.
    ///
    /// # Arguments
    ///
    /// * `prefix` - A hexadecimal string prefix (e.g., "abc", "a1b2c3")
    ///
    /// # Returns
    ///
    /// A vector of all matching ObjectIds. If no matches are found, returns an empty vector.
    /// If multiple matches are found, all are returned (indicating an ambiguous prefix).
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        let dir_names = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for dir_name in dir_names {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                // temp files and other strays never parse as object ids
                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Resolve a full or abbreviated object ID to a stored object
    pub fn expand_object_id(&self, value: &str) -> anyhow::Result<ObjectId> {
        if value.is_empty()
            || value.len() > OBJECT_ID_LENGTH
            || !value.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(RepositoryError::InvalidObjectId {
                value: value.to_string(),
            }
            .into());
        }

        let mut matches = self.find_objects_by_prefix(value)?;
        match matches.len() {
            0 => Err(RepositoryError::ObjectNotFound {
                oid: value.to_string(),
            }
            .into()),
            1 => Ok(matches.remove(0)),
            _ => Err(RepositoryError::AmbiguousObjectId {
                prefix: value.to_string(),
            }
            .into()),
        }
    }
}
