use crate::REPOSITORY_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [REPOSITORY_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.path.join(path).exists()
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.path.join(path).is_file()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.path.join(path).is_dir()
    }

    /// Express a user-supplied path relative to the workspace root
    ///
    /// Absolute paths must live inside the workspace; `.` components are
    /// dropped and `..` may not climb above the root.
    pub fn relativize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let relative = if path.is_absolute() {
            let root = std::fs::canonicalize(&self.path)?;
            let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            absolute
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .map_err(|_| anyhow::anyhow!("{:?} is outside the repository", path))?
        } else {
            path.to_path_buf()
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                Component::ParentDir if normalized.pop() => {}
                _ => anyhow::bail!("{:?} is outside the repository", path),
            }
        }

        Ok(normalized)
    }

    /// Immediate children of a directory, relative to the workspace root
    pub fn list_dir(&self, dir_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let dir_path = match dir_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        let mut entries = std::fs::read_dir(&dir_path)
            .with_context(|| format!("Unable to list directory {:?}", dir_path))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_path(&entry.path()))
            .collect::<Vec<_>>();
        entries.sort();

        Ok(entries)
    }

    /// Every file under `root_file_path` (the whole workspace by default), sorted
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            return Err(RepositoryError::FileNotFound {
                path: root_file_path
                    .strip_prefix(&self.path)
                    .map(Path::to_path_buf)
                    .unwrap_or(root_file_path),
            }
            .into());
        }

        let mut files = WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.check_if_not_ignored_path(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(name: &std::ffi::OsStr) -> bool {
        IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
    }

    fn check_if_not_ignored_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        if relative
            .components()
            .any(|component| Self::is_ignored(component.as_os_str()))
        {
            None
        } else {
            Some(relative.to_path_buf())
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        match std::fs::read(&full_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::FileNotFound {
                    path: file_path.to_path_buf(),
                }
                .into())
            }
            Err(error) => {
                Err(error).with_context(|| format!("Unable to read file {:?}", file_path))
            }
        }
    }
}
