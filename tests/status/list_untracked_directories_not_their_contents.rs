use crate::common::command::{repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_directories_not_their_contents(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file = FileSpec::new(repository_dir.path().join("file.txt"), String::new());
    write_file(file);

    let another_file = FileSpec::new(
        repository_dir
            .path()
            .join("dir")
            .join("nested")
            .join("another_file.txt"),
        String::new(),
    );
    write_file(another_file);

    let expected_output = "?? dir/\n?? file.txt\n".to_string();
    let actual_output = stdout_of(repository_dir.path(), &["status", "--porcelain"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
