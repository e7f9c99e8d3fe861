use crate::common::command::{init_repository_dir, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_inside_tracked_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("4.txt"),
        "four".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("c").join("5.txt"),
        "five".to_string(),
    ));

    let actual_output = stdout_of(repository_dir.path(), &["status", "--porcelain"])?;

    assert_eq!(actual_output, "?? a/4.txt\n?? a/b/c/\n");

    Ok(())
}
