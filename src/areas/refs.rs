//! References (HEAD and branches)
//!
//! References are human-readable names pointing to commits. They can be:
//! - Direct: containing a commit digest
//! - Symbolic: pointing to another reference (e.g., HEAD -> refs/heads/master)
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash followed by a newline (direct reference)
//! - `ref: <path>` followed by a newline (symbolic reference)
//!
//! ## Resolution
//!
//! Resolution follows at most one symbolic step. A symbolic reference must
//! point inside `refs/`, and a branch that has not been created yet (its file
//! is missing under `refs/heads/`) means the repository has no commits on it.

use crate::areas::write_atomically;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use std::path::{Component, Path};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

const REFS_PREFIX: &str = "refs/";
const HEADS_PREFIX: &str = "refs/heads/";

/// Parsed content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Direct object ID
    Direct(ObjectId),
    /// Symbolic reference to another ref, relative to the repository directory
    Symbolic(String),
}

impl Reference {
    pub fn parse(name: &str, content: &str) -> anyhow::Result<Self> {
        let content = content.trim();

        if content.is_empty() {
            return Err(broken(name, "reference file is empty"));
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            return Ok(Reference::Symbolic(symref_match[1].trim().to_string()));
        }

        ObjectId::try_parse(content.to_string())
            .map(Reference::Direct)
            .map_err(|_| broken(name, &format!("malformed content '{content}'")))
    }

    pub fn to_content(&self) -> String {
        match self {
            Reference::Direct(oid) => format!("{oid}\n"),
            Reference::Symbolic(target) => format!("ref: {target}\n"),
        }
    }
}

fn broken(name: &str, reason: &str) -> anyhow::Error {
    RepositoryError::BrokenReference {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// References manager
///
/// Handles reading and writing HEAD and branch references.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.minigit`)
    path: Box<Path>,
}

impl Refs {
    /// Read and parse a reference file, `None` when the file does not exist
    pub fn read_reference(&self, name: &str) -> anyhow::Result<Option<Reference>> {
        let path = self.path.join(name);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read ref file at {:?}", path));
            }
        };

        Reference::parse(name, &content).map(Some)
    }

    /// Resolve a reference to a commit digest
    ///
    /// # Returns
    ///
    /// `Some(oid)` when the reference (or the branch it points at) holds a
    /// digest, `None` when it names a branch with no commits yet.
    pub fn resolve(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        match self.read_reference(name)? {
            Some(Reference::Direct(oid)) => Ok(Some(oid)),
            Some(Reference::Symbolic(target)) => self.resolve_target(name, &target),
            None if name.starts_with(HEADS_PREFIX) => Ok(None),
            None => Err(broken(name, "reference does not exist")),
        }
    }

    fn resolve_target(&self, name: &str, target: &str) -> anyhow::Result<Option<ObjectId>> {
        Self::validate_target(name, target)?;

        match self.read_reference(target)? {
            Some(Reference::Direct(oid)) => Ok(Some(oid)),
            Some(Reference::Symbolic(_)) => Err(broken(
                name,
                &format!("{target} is itself symbolic (more than one level of indirection)"),
            )),
            None if target.starts_with(HEADS_PREFIX) => Ok(None),
            None => Err(broken(name, &format!("target {target} does not exist"))),
        }
    }

    fn validate_target(name: &str, target: &str) -> anyhow::Result<()> {
        let escapes = Path::new(target)
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));

        if !target.starts_with(REFS_PREFIX) || escapes {
            return Err(broken(name, &format!("target {target} is outside refs/")));
        }

        Ok(())
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.resolve(HEAD_REF_NAME)
    }

    /// Point a reference at a new commit
    ///
    /// Writes through a symbolic reference to the branch it names, or to the
    /// reference file itself when it is direct (detached HEAD) or missing.
    pub fn update(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        let location = match self.read_reference(name)? {
            Some(Reference::Symbolic(target)) => {
                Self::validate_target(name, &target)?;
                target
            }
            Some(Reference::Direct(_)) | None => name.to_string(),
        };

        self.write_reference(&location, &Reference::Direct(oid.clone()))?;
        tracing::debug!(reference = %location, %oid, "updated reference");

        Ok(())
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update(HEAD_REF_NAME, oid)
    }

    /// Point HEAD at a branch (`ref: refs/heads/<branch>`)
    pub fn set_head_to_branch(&self, branch: &str) -> anyhow::Result<()> {
        self.write_reference(
            HEAD_REF_NAME,
            &Reference::Symbolic(format!("{HEADS_PREFIX}{branch}")),
        )
    }

    /// Short name of the branch HEAD points at, `None` when HEAD is detached
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        match self.read_reference(HEAD_REF_NAME)? {
            Some(Reference::Symbolic(target)) => Ok(Some(
                target
                    .strip_prefix(HEADS_PREFIX)
                    .unwrap_or(&target)
                    .to_string(),
            )),
            Some(Reference::Direct(_)) => Ok(None),
            None => Err(broken(HEAD_REF_NAME, "reference does not exist")),
        }
    }

    fn write_reference(&self, name: &str, reference: &Reference) -> anyhow::Result<()> {
        let path = self.path.join(name);
        write_atomically(&path, reference.to_content().as_bytes())
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
