use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

const INVALID_REF_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
const PARENT_REGEX: &str = r"^(.+)\^$";
const ANCESTOR_REGEX: &str = r"^(.+)\~(\d+)$";

const HEAD_ALIAS: &str = "@";
const HEADS_PREFIX: &str = "refs/heads/";

/// A user-supplied name for a commit
///
/// Supports:
/// - `HEAD` (or its alias `@`) and branch names such as `master`
/// - full and abbreviated object IDs, tried when no branch has that name
/// - parent notation: `<revision>^`
/// - ancestor notation: `<revision>~<n>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Name(String),
    Parent(Box<Revision>),
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_regex = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_regex.captures(revision) {
            return Ok(Revision::Parent(Box::new(Self::try_parse(&caps[1])?)));
        }

        if let Some(caps) = ancestor_regex.captures(revision) {
            let generations = caps[2]
                .parse::<usize>()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;

            return Ok(Revision::Ancestor(
                Box::new(Self::try_parse(&caps[1])?),
                generations,
            ));
        }

        let name = if revision == HEAD_ALIAS {
            crate::areas::refs::HEAD_REF_NAME
        } else {
            revision
        };

        if name.is_empty() || regex::Regex::new(INVALID_REF_NAME_REGEX)?.is_match(name) {
            anyhow::bail!("'{revision}' is not a valid revision name");
        }

        Ok(Revision::Name(name.to_string()))
    }

    /// Commit (or other object) the revision names
    ///
    /// `None` when it names HEAD or a branch that has no commits yet.
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<Option<ObjectId>> {
        match self {
            Revision::Name(name) => Self::resolve_name(name, repository),
            Revision::Parent(base) => Self::resolve_ancestor(base, 1, repository),
            Revision::Ancestor(base, generations) => {
                Self::resolve_ancestor(base, *generations, repository)
            }
        }
    }

    fn resolve_name(name: &str, repository: &Repository) -> anyhow::Result<Option<ObjectId>> {
        let refs = repository.refs();

        if name == crate::areas::refs::HEAD_REF_NAME {
            return refs.read_head();
        }

        let branch = format!("{HEADS_PREFIX}{name}");
        if refs.read_reference(&branch)?.is_some() {
            return refs.resolve(&branch);
        }

        if refs.current_branch()?.as_deref() == Some(name) {
            // HEAD names the branch but it has no commits yet
            return Ok(None);
        }

        if name.chars().all(|c| c.is_ascii_hexdigit()) {
            return repository.database().expand_object_id(name).map(Some);
        }

        anyhow::bail!("ambiguous argument '{name}': unknown revision or path not in the working tree")
    }

    fn resolve_ancestor(
        base: &Revision,
        generations: usize,
        repository: &Repository,
    ) -> anyhow::Result<Option<ObjectId>> {
        let Some(mut oid) = base.resolve(repository)? else {
            return Ok(None);
        };

        for _ in 0..generations {
            let commit = repository
                .database()
                .parse_object_as_commit(&oid)?
                .ok_or_else(|| anyhow::anyhow!("object {oid} is not a commit"))?;

            oid = commit
                .parent()
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("commit {} has no parent", oid.to_short_oid()))?;
        }

        Ok(Some(oid))
    }
}
