use crate::common::command::{init_repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_cached_diff_for_file_added_to_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("empty.txt"),
        String::new(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "new.txt", "empty.txt"])
        .assert()
        .success();

    // an empty file is still a new file, it just has no hunks
    let expected_output = "diff --git a/empty.txt b/empty.txt\nnew file mode 100644\nindex 0000000..e69de29\ndiff --git a/new.txt b/new.txt\nnew file mode 100644\nindex 0000000..3e5126c\n--- /dev/null\n+++ b/new.txt\n@@ -0,0 +1 @@\n+new\n\\ No newline at end of file\n";
    let actual_output = stdout_of(repository_dir.path(), &["diff", "--cached"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
