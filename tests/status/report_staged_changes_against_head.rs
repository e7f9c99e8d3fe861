use crate::common::command::{init_repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_changes_against_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "staged one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "1.txt", "new.txt"])
        .assert()
        .success();

    // modified again after staging
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "newer".to_string(),
    ));

    let expected_output = "M  1.txt\nAM new.txt\n".to_string();
    let actual_output = stdout_of(repository_dir.path(), &["status", "--porcelain"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
