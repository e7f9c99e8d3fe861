use crate::areas::database::TreeSnapshot;
use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::file_diff::FileDiff;
use crate::artifacts::diff::myers::Hunk;
use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

const NULL_SHORT_OID: &str = "0000000";
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Compare HEAD with the index instead of the working tree
    pub cached: bool,
    /// Either two revisions to compare, or paths limiting the comparison
    pub args: Vec<String>,
}

impl Repository {
    /// Differences between two snapshots (trees or commits); `None` is the empty tree
    pub fn diff_trees(
        &self,
        old: Option<&ObjectId>,
        new: Option<&ObjectId>,
    ) -> anyhow::Result<Vec<FileDiff>> {
        let mut tree_diff = TreeDiff::new(self.database());
        tree_diff.compare_oids(old, new, Path::new(""))?;

        tree_diff
            .into_changes()
            .into_iter()
            .map(|(path, change)| -> anyhow::Result<Option<FileDiff>> {
                let old = match change.old_entry() {
                    Some(entry) => DiffTarget::from_snapshot(&path, entry, self.database())?,
                    None => DiffTarget::from_nothing(&path),
                };
                let new = match change.new_entry() {
                    Some(entry) => DiffTarget::from_snapshot(&path, entry, self.database())?,
                    None => DiffTarget::from_nothing(&path),
                };

                Ok(FileDiff::between(old, new))
            })
            .filter_map(Result::transpose)
            .collect()
    }

    /// Differences between the HEAD commit and the working tree
    ///
    /// Only tracked paths (in HEAD or in the index) take part; untracked files
    /// never show up here.
    pub fn diff_workspace<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<Vec<FileDiff>> {
        self.ensure_initialized()?;
        let head_snapshot = self.head_snapshot()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let tracked = head_snapshot
            .keys()
            .cloned()
            .chain(index.entries().map(|entry| entry.name.clone()))
            .collect::<BTreeSet<_>>();
        let pathspec = self.pathspec(paths)?;

        let mut diffs = Vec::new();
        for path in tracked.iter().filter(|path| Self::matches(&pathspec, path)) {
            let old = self.head_side(&head_snapshot, path)?;
            let new = DiffTarget::from_file(path, self.workspace())?;

            diffs.extend(FileDiff::between(old, new));
        }

        Ok(diffs)
    }

    /// Differences between the HEAD commit and the index
    pub fn diff_cached<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<Vec<FileDiff>> {
        self.ensure_initialized()?;
        let head_snapshot = self.head_snapshot()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let tracked = head_snapshot
            .keys()
            .cloned()
            .chain(index.entries().map(|entry| entry.name.clone()))
            .collect::<BTreeSet<_>>();
        let pathspec = self.pathspec(paths)?;

        let mut diffs = Vec::new();
        for path in tracked.iter().filter(|path| Self::matches(&pathspec, path)) {
            let old = self.head_side(&head_snapshot, path)?;
            let new = match index.entry_by_path(path) {
                Some(entry) => DiffTarget::from_index(path, entry, self.database())?,
                None => DiffTarget::from_nothing(path),
            };

            diffs.extend(FileDiff::between(old, new));
        }

        Ok(diffs)
    }

    pub fn diff(&self, options: &DiffOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let diffs = match self.revision_pair(&options.args)? {
            Some((old, new)) => self.diff_trees(Some(&old), Some(&new))?,
            None if options.cached => self.diff_cached(&options.args)?,
            None => self.diff_workspace(&options.args)?,
        };

        for file_diff in &diffs {
            self.print_diff(file_diff)?;
        }

        Ok(())
    }

    /// Files of the commit HEAD points at, empty before the first commit
    pub fn head_snapshot(&self) -> anyhow::Result<TreeSnapshot> {
        let Some(head) = self.refs().read_head()? else {
            return Ok(TreeSnapshot::new());
        };

        let tree_oid =
            self.database()
                .peel_to_tree(&head)?
                .ok_or_else(|| RepositoryError::CorruptObject {
                    oid: head.to_string(),
                    reason: "HEAD does not point at a commit".to_string(),
                })?;

        self.database().flatten_tree(&tree_oid)
    }

    fn head_side(&self, head_snapshot: &TreeSnapshot, path: &Path) -> anyhow::Result<DiffTarget> {
        match head_snapshot.get(path) {
            Some(entry) => DiffTarget::from_snapshot(path, entry, self.database()),
            None => Ok(DiffTarget::from_nothing(path)),
        }
    }

    /// Two arguments that both name revisions (and not working tree paths)
    fn revision_pair(&self, args: &[String]) -> anyhow::Result<Option<(ObjectId, ObjectId)>> {
        let [old, new] = args else {
            return Ok(None);
        };

        if self.workspace().exists(Path::new(old)) || self.workspace().exists(Path::new(new)) {
            return Ok(None);
        }

        Ok(Some((self.resolve_object(old)?, self.resolve_object(new)?)))
    }

    fn pathspec<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<Vec<PathBuf>> {
        paths
            .iter()
            .map(|path| self.workspace().relativize(path.as_ref()))
            .collect()
    }

    fn matches(pathspec: &[PathBuf], path: &Path) -> bool {
        pathspec.is_empty()
            || pathspec
                .iter()
                .any(|spec| spec.as_os_str().is_empty() || path.starts_with(spec))
    }

    fn print_diff(&self, file_diff: &FileDiff) -> anyhow::Result<()> {
        let (a, b) = (file_diff.old_side(), file_diff.new_side());

        writeln!(
            self.writer(),
            "{}",
            format!(
                "diff --git {} {}",
                Path::new("a").join(&file_diff.path).display(),
                Path::new("b").join(&file_diff.path).display()
            )
            .bold()
        )?;
        self.print_diff_mode(a, b)?;
        self.print_diff_content(file_diff)?;

        Ok(())
    }

    fn print_diff_mode(&self, a: &DiffTarget, b: &DiffTarget) -> anyhow::Result<()> {
        if !a.exists() {
            writeln!(
                self.writer(),
                "{}",
                format!("new file mode {}", b.pretty_mode()).bold()
            )?;
        } else if !b.exists() {
            writeln!(
                self.writer(),
                "{}",
                format!("deleted file mode {}", a.pretty_mode()).bold()
            )?;
        }

        Ok(())
    }

    fn print_diff_content(&self, file_diff: &FileDiff) -> anyhow::Result<()> {
        let (a, b) = (file_diff.old_side(), file_diff.new_side());
        let short_oid = |target: &DiffTarget| {
            target
                .oid()
                .map(ObjectId::to_short_oid)
                .unwrap_or_else(|| NULL_SHORT_OID.to_string())
        };

        let mut oid_range = format!("index {}..{}", short_oid(a), short_oid(b));
        if a.exists() && b.exists() {
            oid_range.push_str(format!(" {}", a.pretty_mode()).as_str());
        }
        writeln!(self.writer(), "{}", oid_range.bold())?;

        if file_diff.binary {
            writeln!(
                self.writer(),
                "Binary files {} and {} differ",
                a.diff_path("a").display(),
                b.diff_path("b").display()
            )?;
            return Ok(());
        }

        let hunks = file_diff.hunks();
        if hunks.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", a.diff_path("a").display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", b.diff_path("b").display()).bold()
        )?;

        for hunk in hunks {
            self.print_diff_hunk(&hunk)?;
        }

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk<String>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for edit in hunk.edits() {
            let line = edit.to_string();
            match line.strip_suffix('\n') {
                Some(line) => writeln!(self.writer(), "{line}")?,
                None => {
                    writeln!(self.writer(), "{line}")?;
                    writeln!(self.writer(), "{NO_NEWLINE_MARKER}")?;
                }
            }
        }

        Ok(())
    }
}
