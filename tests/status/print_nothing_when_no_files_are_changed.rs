use crate::common::command::{init_repository_dir, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    assert_eq!(
        stdout_of(repository_dir.path(), &["status", "--porcelain"])?,
        ""
    );
    assert_eq!(
        stdout_of(repository_dir.path(), &["status"])?,
        "On branch master\n\nnothing to commit, working tree clean\n"
    );

    Ok(())
}
