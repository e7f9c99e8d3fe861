use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, commit_and_get_oid, repository_dir, run_minigit_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_single_commit_in_medium_format(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello World\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "hello.txt"])
        .assert()
        .success();

    let oid = commit_and_get_oid(repository_dir.path(), "Initial commit\n\nExplain the change")?;

    let expected_output = format!(
        "commit {oid}\nAuthor: {AUTHOR_NAME} <{AUTHOR_EMAIL}>\nDate:   Sun Jan 1 12:00:00 2023 +0000\n\n    Initial commit\n    \n    Explain the change\n"
    );
    assert_eq!(stdout_of(repository_dir.path(), &["log"])?, expected_output);

    Ok(())
}
