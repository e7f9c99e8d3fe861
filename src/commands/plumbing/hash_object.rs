use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the blob digest of a working tree file, storing the blob with `write`
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        let object_path = self.workspace().relativize(object_path)?;
        let blob = self.workspace().parse_blob(&object_path)?;

        let object_id = if write {
            self.ensure_initialized()?;
            self.database().store(&blob)?
        } else {
            blob.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
