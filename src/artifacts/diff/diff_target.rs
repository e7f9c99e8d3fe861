use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";

/// One side of a file diff: a blob in the database, a working tree file, or nothing
#[derive(Debug, Clone)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) oid: Option<ObjectId>,
    pub(crate) mode: Option<EntryMode>,
    pub(crate) content: Bytes,
}

impl DiffTarget {
    /// Side backed by a blob recorded in a stored tree
    pub fn from_snapshot(
        file: &Path,
        entry: &DatabaseEntry,
        database: &Database,
    ) -> anyhow::Result<Self> {
        Self::from_blob(file, &entry.oid, entry.mode, database)
    }

    /// Side backed by the blob staged in the index
    pub fn from_index(
        file: &Path,
        entry: &IndexEntry,
        database: &Database,
    ) -> anyhow::Result<Self> {
        Self::from_blob(file, &entry.oid, EntryMode::Regular, database)
    }

    /// Side read from the working tree; a missing file is an absent side
    pub fn from_file(file: &Path, workspace: &Workspace) -> anyhow::Result<Self> {
        if !workspace.is_file(file) {
            return Ok(Self::from_nothing(file));
        }

        let blob = workspace.parse_blob(file)?;

        Ok(Self {
            file: file.to_path_buf(),
            oid: Some(blob.object_id()?),
            mode: Some(EntryMode::Regular),
            content: blob.content().clone(),
        })
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            oid: None,
            mode: None,
            content: Bytes::new(),
        }
    }

    fn from_blob(
        file: &Path,
        oid: &ObjectId,
        mode: EntryMode,
        database: &Database,
    ) -> anyhow::Result<Self> {
        let blob = database
            .parse_object_as_blob(oid)?
            .ok_or_else(|| RepositoryError::CorruptObject {
                oid: oid.to_string(),
                reason: format!("{} should point at a blob", file.display()),
            })?;

        Ok(Self {
            file: file.to_path_buf(),
            oid: Some(oid.clone()),
            mode: Some(mode),
            content: blob.content().clone(),
        })
    }

    pub fn exists(&self) -> bool {
        self.oid.is_some()
    }

    pub fn oid(&self) -> Option<&ObjectId> {
        self.oid.as_ref()
    }

    pub fn lines(&self) -> Vec<String> {
        self.blob().lines()
    }

    pub fn is_binary(&self) -> bool {
        self.blob().is_binary()
    }

    fn blob(&self) -> Blob {
        Blob::new(self.content.clone())
    }

    /// Path shown on the `---`/`+++` lines: `<prefix>/<file>`, or `/dev/null`
    pub fn diff_path(&self, prefix: &str) -> PathBuf {
        if self.exists() {
            Path::new(prefix).join(&self.file)
        } else {
            PathBuf::from(NULL_PATH)
        }
    }

    pub fn pretty_mode(&self) -> &'static str {
        self.mode.unwrap_or_default().as_str()
    }
}
