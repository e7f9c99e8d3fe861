use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// List a tree, or the tree of a commit
    ///
    /// With `recursive`, subtrees are expanded and only files are listed, with
    /// their full path.
    pub fn ls_tree(&self, object: &str, recursive: bool) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let oid = self.resolve_object(object)?;

        let tree_oid = self.database().peel_to_tree(&oid)?.ok_or_else(|| {
            RepositoryError::CorruptObject {
                oid: oid.to_string(),
                reason: "not a tree object".to_string(),
            }
        })?;

        if recursive {
            for (path, entry) in self.database().flatten_tree(&tree_oid)? {
                writeln!(
                    self.writer(),
                    "{} {} {}\t{}",
                    entry.mode.as_padded_str(),
                    ObjectType::Blob,
                    entry.oid,
                    path.display()
                )?;
            }
        } else if let Some(tree) = self.database().parse_object_as_tree(&tree_oid)? {
            if !tree.is_empty() {
                writeln!(self.writer(), "{}", tree.display())?;
            }
        }

        Ok(())
    }
}
