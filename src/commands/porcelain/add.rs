use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::RepositoryError;
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage files (directories expand to every file below them)
    ///
    /// Every path is read and stored before the index is saved, so a path that
    /// does not exist aborts the whole call and leaves the index untouched.
    pub fn add<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let paths = paths
            .iter()
            .map(|path| self.expand_pathspec(path.as_ref()))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten();

        for path in paths {
            let blob = self.workspace().parse_blob(&path)?;
            let blob_id = self.database().store(&blob)?;

            tracing::trace!(path = %path.display(), oid = %blob_id, "staged file");
            index.add(IndexEntry::new(path, blob_id));
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(())
    }

    /// Unstage paths; a directory unstages everything tracked below it
    ///
    /// Working tree files are never touched, and paths that are not staged are
    /// ignored.
    pub fn remove<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        for path in paths {
            let path = self.workspace().relativize(path.as_ref())?;
            index.remove(&path);
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(())
    }

    fn expand_pathspec(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let path = self.workspace().relativize(path)?;

        if !self.workspace().exists(&path) {
            return Err(RepositoryError::FileNotFound { path }.into());
        }

        if path.as_os_str().is_empty() {
            self.workspace().list_files(None)
        } else {
            self.workspace().list_files(Some(&path))
        }
    }
}
