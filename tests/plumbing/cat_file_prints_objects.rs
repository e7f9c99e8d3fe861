use crate::common::command::{init_repository_dir, run_minigit_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn cat_file_prints_objects(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    assert_eq!(
        stdout_of(repository_dir.path(), &["cat-file", "-t", "HEAD"])?,
        "commit\n"
    );
    assert_eq!(
        stdout_of(repository_dir.path(), &["cat-file", "-t", "43dd47e"])?,
        "blob\n"
    );
    assert_eq!(
        stdout_of(repository_dir.path(), &["cat-file", "-p", "43dd47e"])?,
        "one"
    );

    let commit = stdout_of(repository_dir.path(), &["cat-file", "-p", "master"])?;
    let tree_oid = commit
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("tree "))
        .ok_or("commit without a tree line")?
        .to_string();
    assert_eq!(
        stdout_of(repository_dir.path(), &["cat-file", "-t", &tree_oid])?,
        "tree\n"
    );

    run_minigit_command(repository_dir.path(), &["cat-file", "-p", "0123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("object 0123456 not found"));

    Ok(())
}
