use crate::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository directory layout
    ///
    /// Safe to run on an existing repository: present files are left alone and
    /// only what is missing gets created. The branch file is not created here,
    /// the first commit does that.
    pub fn init(&self) -> anyhow::Result<()> {
        let reinitialized = self.is_initialized() && self.refs().head_path().exists();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .minigit/refs/heads directory")?;

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head_to_branch(DEFAULT_BRANCH)
                .context("Failed to create initial HEAD reference")?;
        }

        let mut index = self.index_mut();
        if !index.path().exists() {
            index
                .write_updates()
                .context("Failed to create .minigit/index file")?;
        }

        let verb = if reinitialized {
            "Reinitialized existing"
        } else {
            "Initialized empty"
        };
        tracing::debug!(path = %self.git_path().display(), reinitialized, "initialized repository");

        writeln!(
            self.writer(),
            "{verb} minigit repository in {}",
            self.git_path().display()
        )?;

        Ok(())
    }
}
