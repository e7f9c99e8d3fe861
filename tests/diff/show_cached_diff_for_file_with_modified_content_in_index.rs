use crate::common::command::{init_repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_cached_diff_for_file_with_modified_content_in_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    // later working tree edits are not part of the cached diff
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed again".to_string(),
    ));

    let expected_output = "diff --git a/1.txt b/1.txt\nindex 43dd47e..21fb1ec 100644\n--- a/1.txt\n+++ b/1.txt\n@@ -1 +1 @@\n-one\n\\ No newline at end of file\n+changed\n\\ No newline at end of file\n";
    let actual_output = stdout_of(repository_dir.path(), &["diff", "--cached"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
