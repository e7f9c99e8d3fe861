use crate::areas::database::TreeSnapshot;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{FileChange, IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepositoryError;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;

/// Classification of every interesting path in the repository
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Commit HEAD resolves to, `None` before the first commit
    pub head: Option<ObjectId>,
    /// Files of the HEAD commit
    pub head_tree: TreeSnapshot,
    /// Tracked paths whose index or working tree copy differs
    pub changed_files: BTreeMap<PathBuf, FileChange>,
    /// Workspace paths absent from the index; directories end with `/`
    pub untracked_files: FileSet,
}

impl StatusInfo {
    pub fn staged(&self) -> impl Iterator<Item = (&PathBuf, IndexChangeType)> {
        self.changed_files
            .iter()
            .filter(|(_, change)| change.is_staged())
            .map(|(path, change)| (path, change.index_change))
    }

    pub fn unstaged(&self) -> impl Iterator<Item = (&PathBuf, WorkspaceChangeType)> {
        self.changed_files
            .iter()
            .filter(|(_, change)| change.is_unstaged())
            .map(|(path, change)| (path, change.workspace_change))
    }

    pub fn is_clean(&self) -> bool {
        self.changed_files.is_empty() && self.untracked_files.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);

        let mut untracked_files = FileSet::new();
        self.scan_workspace(None, &mut untracked_files, index, &inspector)?;

        let head = self.repository.refs().read_head()?;
        let head_tree = self.load_head_tree(head.as_ref())?;

        let mut changed_files = self.check_index_entries(&head_tree, index, &inspector)?;
        self.collect_deleted_head_files(&head_tree, index, &mut changed_files);

        Ok(StatusInfo {
            head,
            head_tree,
            changed_files,
            untracked_files,
        })
    }

    fn scan_workspace(
        &self,
        prefix_path: Option<&Path>,
        untracked_files: &mut FileSet,
        index: &Index,
        inspector: &Inspector<'_>,
    ) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();

        for path in workspace.list_dir(prefix_path)? {
            if workspace.is_dir(&path) {
                if index.is_tracked_directory(&path) {
                    self.scan_workspace(Some(&path), untracked_files, index, inspector)?;
                } else if inspector.is_reportable_untracked(&path)? {
                    // add the file separator since it's a directory
                    let mut path = path;
                    path.push("");
                    untracked_files.insert(path);
                }
            } else if index.entry_by_path(&path).is_none() {
                untracked_files.insert(path);
            }
        }

        Ok(())
    }

    fn load_head_tree(&self, head: Option<&ObjectId>) -> anyhow::Result<TreeSnapshot> {
        let Some(head) = head else {
            return Ok(TreeSnapshot::new());
        };

        let database = self.repository.database();
        let commit = database.parse_object_as_commit(head)?.ok_or_else(|| {
            RepositoryError::CorruptObject {
                oid: head.to_string(),
                reason: "HEAD does not point at a commit".to_string(),
            }
        })?;

        database.flatten_tree(commit.tree_oid())
    }

    fn check_index_entries(
        &self,
        head_tree: &TreeSnapshot,
        index: &Index,
        inspector: &Inspector<'_>,
    ) -> anyhow::Result<BTreeMap<PathBuf, FileChange>> {
        let mut changed_files = BTreeMap::<PathBuf, FileChange>::new();

        for entry in index.entries() {
            let workspace_change = inspector.check_index_against_workspace(entry)?;
            let index_change =
                inspector.check_index_against_head_tree(Some(entry), head_tree.get(&entry.name));

            let change = FileChange {
                index_change,
                workspace_change,
            };
            if change != FileChange::default() {
                changed_files.insert(entry.name.clone(), change);
            }
        }

        Ok(changed_files)
    }

    fn collect_deleted_head_files(
        &self,
        head_tree: &TreeSnapshot,
        index: &Index,
        changed_files: &mut BTreeMap<PathBuf, FileChange>,
    ) {
        for path in head_tree.keys() {
            if index.entry_by_path(path).is_none() {
                changed_files.entry(path.clone()).or_default().index_change =
                    IndexChangeType::Deleted;
            }
        }
    }
}
