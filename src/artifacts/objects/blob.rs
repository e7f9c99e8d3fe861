//! Blob object
//!
//! Blobs store file content. They contain only the raw file data, without any
//! metadata like the file name (names live in trees).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Each unique file content is stored once, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content split into lines, decoded lossily for diffing
    ///
    /// Each line keeps its terminator (`\n` or `\r\n`), so a missing final
    /// newline or a changed line ending still shows up as a changed line.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.content)
            .split_inclusive('\n')
            .map(str::to_string)
            .collect()
    }

    /// Heuristic used by diff output: content holding a NUL byte is binary
    pub fn is_binary(&self) -> bool {
        self.content.contains(&0)
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}
