use crate::areas::repository::Repository;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use derive_new::new;
use std::path::Path;

/// Compares one path across the HEAD tree, the index and the working tree
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Whether an untracked workspace path is worth reporting
    ///
    /// Files always are; a directory only when some file lives below it, so
    /// empty directory hierarchies stay silent.
    pub fn is_reportable_untracked(&self, path: &Path) -> anyhow::Result<bool> {
        let workspace = self.repository.workspace();

        if !workspace.is_dir(path) {
            return Ok(true);
        }

        Ok(!workspace.list_files(Some(path))?.is_empty())
    }

    fn is_content_changed(&self, index_entry: &IndexEntry) -> anyhow::Result<bool> {
        let blob = self.repository.workspace().parse_blob(&index_entry.name)?;
        let oid = blob.object_id()?;

        Ok(oid != index_entry.oid)
    }

    pub fn check_index_against_workspace(
        &self,
        entry: &IndexEntry,
    ) -> anyhow::Result<WorkspaceChangeType> {
        if !self.repository.workspace().is_file(&entry.name) {
            return Ok(WorkspaceChangeType::Deleted);
        }

        if self.is_content_changed(entry)? {
            Ok(WorkspaceChangeType::Modified)
        } else {
            Ok(WorkspaceChangeType::None)
        }
    }

    pub fn check_index_against_head_tree(
        &self,
        index_entry: Option<&IndexEntry>,
        head_entry: Option<&DatabaseEntry>,
    ) -> IndexChangeType {
        match (index_entry, head_entry) {
            (Some(index_entry), Some(head_entry)) if head_entry.oid != index_entry.oid => {
                IndexChangeType::Modified
            }
            (Some(_), None) => IndexChangeType::Added,
            (None, Some(_)) => IndexChangeType::Deleted,
            _ => IndexChangeType::None,
        }
    }
}
