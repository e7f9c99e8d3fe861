use crate::common::command::{init_repository_dir, run_minigit_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_unstaged_files_as_deleted_and_untracked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_minigit_command(repository_dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    let expected_output = "D  1.txt\n?? 1.txt\n".to_string();
    let actual_output = stdout_of(repository_dir.path(), &["status", "--porcelain"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
