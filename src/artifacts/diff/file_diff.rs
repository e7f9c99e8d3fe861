use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::myers::{DiffAlgorithm, Edit, HUNK_CONTEXT, Hunk, MyersDiff};
use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDiffStatus {
    Added,
    Deleted,
    Modified,
}

/// Line-level difference of one path between two snapshots
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: PathBuf,
    pub status: FileDiffStatus,
    pub old_oid: Option<ObjectId>,
    pub new_oid: Option<ObjectId>,
    pub edits: Vec<Edit<String>>,
    /// Either side holds a NUL byte; `edits` is left empty
    pub binary: bool,
    old: DiffTarget,
    new: DiffTarget,
}

impl FileDiff {
    /// Diff two sides of a path, `None` when both hold the same content
    ///
    /// A side that does not exist makes the diff an addition or a deletion,
    /// which is distinct from a side holding an empty file.
    pub fn between(old: DiffTarget, new: DiffTarget) -> Option<Self> {
        let status = match (old.exists(), new.exists()) {
            (false, false) => return None,
            (false, true) => FileDiffStatus::Added,
            (true, false) => FileDiffStatus::Deleted,
            (true, true) if old.oid == new.oid => return None,
            (true, true) => FileDiffStatus::Modified,
        };

        let binary = old.is_binary() || new.is_binary();
        let edits = if binary {
            Vec::new()
        } else {
            let (a, b) = (old.lines(), new.lines());
            MyersDiff::new(&a, &b).diff()
        };

        Some(FileDiff {
            path: new.file.clone(),
            status,
            old_oid: old.oid.clone(),
            new_oid: new.oid.clone(),
            edits,
            binary,
            old,
            new,
        })
    }

    pub fn old_side(&self) -> &DiffTarget {
        &self.old
    }

    pub fn new_side(&self) -> &DiffTarget {
        &self.new
    }

    pub fn hunks(&self) -> Vec<Hunk<String>> {
        Hunk::build(&self.edits, HUNK_CONTEXT)
    }

    pub fn added_lines(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| matches!(edit, Edit::Insert { .. }))
            .count()
    }

    pub fn deleted_lines(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| matches!(edit, Edit::Delete { .. }))
            .count()
    }
}
