use crate::common::command::{minigit_commit, repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn write_root_and_child_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello World\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    minigit_commit(repository_dir.path(), "Initial commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);

    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello again\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "hello.txt"])
        .assert()
        .success();

    minigit_commit(repository_dir.path(), "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master [0-9a-f]{7}\] Second commit\n$",
        )?);

    Ok(())
}
