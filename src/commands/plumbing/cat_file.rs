use crate::areas::repository::Repository;
use crate::artifacts::log::revision::Revision;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Print the object content
    Pretty,
    /// Print the object kind
    Type,
}

impl Repository {
    pub fn cat_file(&self, object: &str, mode: CatFileMode) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let object_id = self.resolve_object(object)?;

        match mode {
            CatFileMode::Type => {
                let (object_type, _) = self.database().get(&object_id)?;
                writeln!(self.writer(), "{}", object_type)?;
            }
            CatFileMode::Pretty => match self.database().parse_object(&object_id)? {
                // blobs are written untouched so binary content survives
                ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                object => writeln!(self.writer(), "{}", object.display())?,
            },
        }

        Ok(())
    }

    /// Object named by a revision, a full digest or an abbreviated one
    pub(crate) fn resolve_object(&self, name: &str) -> anyhow::Result<ObjectId> {
        Revision::try_parse(name)?
            .resolve(self)?
            .ok_or_else(|| anyhow::anyhow!("{name} does not point at any commit yet"))
    }
}
