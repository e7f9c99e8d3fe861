use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;
use std::collections::HashSet;

/// History reachable from a commit, newest first
///
/// The list holds no cursor of its own: every call to `into_iter` (or every
/// clone) walks again from `start`.
#[derive(Debug, Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start: Option<ObjectId>,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = anyhow::Result<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
            seen: HashSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl RevListIntoIter<'_> {
    fn load(&mut self, commit_oid: ObjectId) -> anyhow::Result<(ObjectId, Commit)> {
        if !self.seen.insert(commit_oid.clone()) {
            return Err(RepositoryError::CorruptObject {
                oid: commit_oid.to_string(),
                reason: "commit history loops back on itself".to_string(),
            }
            .into());
        }

        let commit = self
            .database
            .parse_object_as_commit(&commit_oid)?
            .ok_or_else(|| RepositoryError::CorruptObject {
                oid: commit_oid.to_string(),
                reason: "expected a commit".to_string(),
            })?;

        self.current_commit_oid = commit.parent().cloned();
        Ok((commit_oid, commit))
    }
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        // an error ends the walk: current_commit_oid stays None
        Some(self.load(commit_oid))
    }
}
