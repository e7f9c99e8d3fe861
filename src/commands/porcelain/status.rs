use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFormat {
    #[default]
    Long,
    Porcelain,
}

// Terminology:
// - staged: the index differs from the HEAD commit
// - unstaged: the working tree differs from the index
// - untracked: the working tree holds a path the index doesn't know about
impl Repository {
    /// Classify every path against HEAD, the index and the working tree
    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        Status::new(self).initialize(&index)
    }

    pub fn status(&self, format: StatusFormat) -> anyhow::Result<()> {
        let status_info = self.status_info()?;

        match format {
            StatusFormat::Porcelain => self.print_porcelain_status(&status_info),
            StatusFormat::Long => self.print_long_status(&status_info),
        }
    }

    fn print_porcelain_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        for (file, change) in &status_info.changed_files {
            writeln!(self.writer(), "{} {}", change, file.display())?;
        }

        for file in &status_info.untracked_files {
            writeln!(self.writer(), "?? {}", file.display())?;
        }

        Ok(())
    }

    fn print_long_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        match self.refs().current_branch()? {
            Some(branch) => writeln!(self.writer(), "On branch {branch}")?,
            None => {
                let head = status_info
                    .head
                    .as_ref()
                    .map(|oid| oid.to_short_oid())
                    .unwrap_or_default();
                writeln!(self.writer(), "HEAD detached at {head}")?
            }
        }

        if status_info.head.is_none() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "No commits yet")?;
        }

        let staged = status_info
            .staged()
            .map(|(file, change)| (file, FileChangeType::Index(change)))
            .collect::<Vec<_>>();
        if !staged.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Changes to be committed:")?;
            writeln!(
                self.writer(),
                "  (use \"minigit rm <file>...\" to unstage)"
            )?;
            for (file, change) in &staged {
                writeln!(self.writer(), "{}{}", change, file.display())?;
            }
        }

        let unstaged = status_info
            .unstaged()
            .map(|(file, change)| (file, FileChangeType::Workspace(change)))
            .collect::<Vec<_>>();
        if !unstaged.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Changes not staged for commit:")?;
            writeln!(
                self.writer(),
                "  (use \"minigit add <file>...\" to update what will be committed)"
            )?;
            for (file, change) in &unstaged {
                writeln!(self.writer(), "{}{}", change, file.display())?;
            }
        }

        if !status_info.untracked_files.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Untracked files:")?;
            writeln!(
                self.writer(),
                "  (use \"minigit add <file>...\" to include in what will be committed)"
            )?;
            for file in &status_info.untracked_files {
                writeln!(
                    self.writer(),
                    "{:>8}{}",
                    "",
                    file.display().to_string().red()
                )?;
            }
        }

        let footer = if status_info.is_clean() {
            Some("nothing to commit, working tree clean")
        } else if staged.is_empty() && !unstaged.is_empty() {
            Some("no changes added to commit (use \"minigit add\")")
        } else if staged.is_empty() {
            Some("nothing added to commit but untracked files present (use \"minigit add\" to track)")
        } else {
            None
        };

        if let Some(footer) = footer {
            writeln!(self.writer())?;
            writeln!(self.writer(), "{footer}")?;
        }

        Ok(())
    }
}
