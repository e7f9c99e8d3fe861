use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Serializes an object into its payload (without the canonical header)
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Rebuilds an object from its payload (the header has already been consumed)
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        digest_of(self.object_type(), &self.serialize()?)
    }
}

/// Canonical encoding of an object: `<type> <size>\0<payload>`
pub fn canonical_encoding(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let mut encoded = object_type.header(payload.len()).into_bytes();
    encoded.extend_from_slice(payload);

    Bytes::from(encoded)
}

/// Digest of an object, computed over its canonical encoding
pub fn digest_of(object_type: ObjectType, payload: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(object_type.header(payload.len()).as_bytes());
    hasher.update(payload);

    ObjectId::from_digest(&hasher.finalize())
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
