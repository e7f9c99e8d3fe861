use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Commit the index with the author configured in the environment
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        self.commit_as(message, Author::load_from_env()?)
    }

    /// Commit the index as `author`, advancing the branch HEAD points at
    ///
    /// Trees are stored children first and the commit last, so a commit is
    /// never written before the objects it references. The index is kept as
    /// is: it still describes the content of the next commit.
    pub fn commit_as(&self, message: &str, author: Author) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let message = message.trim();
        if message.is_empty() {
            anyhow::bail!("Aborting commit due to empty commit message");
        }

        let tree = Tree::build(index.entries())?;
        tree.traverse(&mut |subtree| self.database().store(subtree).map(|_| ()))?;
        let tree_id = tree.object_id()?;

        let parent = self.refs().read_head()?;
        let is_root = parent.is_none();

        let commit = Commit::new(parent, tree_id, author, message.to_string());
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        tracing::debug!(oid = %commit_id, root = is_root, "created commit");

        let branch = match self.refs().current_branch()? {
            Some(branch) => branch,
            None => "detached HEAD".to_string(),
        };
        let root_marker = if is_root { " (root-commit)" } else { "" };

        writeln!(
            self.writer(),
            "[{branch}{root_marker} {}] {}",
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
