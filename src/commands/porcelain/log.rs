use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub format: CommitDisplayFormat,
    /// Where the walk starts, HEAD by default
    pub revision: Option<String>,
}

impl Repository {
    /// History reachable from `start`, newest first
    pub fn rev_list(&self, start: Option<ObjectId>) -> RevList<'_> {
        RevList::new(self.database(), start)
    }

    pub fn log(&self, options: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let revision = Revision::try_parse(options.revision.as_deref().unwrap_or("HEAD"))?;
        let start = revision.resolve(self)?;

        if start.is_none() {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        }

        for (index, item) in self.rev_list(start).into_iter().enumerate() {
            let (commit_oid, commit) = item?;

            match options.format {
                CommitDisplayFormat::Medium => {
                    if index > 0 {
                        writeln!(self.writer())?;
                    }
                    self.show_commit_medium(&commit_oid, &commit)?;
                }
                CommitDisplayFormat::OneLine => self.show_commit_oneline(&commit_oid, &commit)?,
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {commit_oid}").yellow()
        )?;
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
