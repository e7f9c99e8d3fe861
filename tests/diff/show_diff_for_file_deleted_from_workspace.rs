use crate::common::command::{init_repository_dir, stdout_of};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_for_file_deleted_from_workspace(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // delete file a/2.txt
    delete_path(&repository_dir.path().join("a").join("2.txt"));

    let expected_output = "diff --git a/a/2.txt b/a/2.txt\ndeleted file mode 100644\nindex 64c5e58..0000000\n--- a/a/2.txt\n+++ /dev/null\n@@ -1 +0,0 @@\n-two\n\\ No newline at end of file\n";
    let actual_output = stdout_of(repository_dir.path(), &["diff"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
