use crate::common::command::{init_repository_dir, stdout_of};
use crate::common::file::write_bytes;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_binary_diff(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_bytes(&repository_dir.path().join("1.txt"), b"bin\0ary");

    let expected_output = "diff --git a/1.txt b/1.txt\nindex 43dd47e..87ae6b6 100644\nBinary files a/1.txt and b/1.txt differ\n";
    let actual_output = stdout_of(repository_dir.path(), &["diff"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
