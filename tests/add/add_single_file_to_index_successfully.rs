use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file = FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello World\n".to_string(),
    );
    write_file(file);

    run_minigit_command(repository_dir.path(), &["add", "hello.txt"])
        .assert()
        .success();

    let index = std::fs::read_to_string(repository_dir.path().join(".minigit").join("index"))?;
    assert_eq!(
        index,
        "{\n  \"hello.txt\": \"557db03de997c86a4a028e1ebd3a1ceb225be238\"\n}\n"
    );

    let blob_path = repository_dir
        .path()
        .join(".minigit")
        .join("objects")
        .join("55")
        .join("7db03de997c86a4a028e1ebd3a1ceb225be238");
    assert!(blob_path.is_file());

    Ok(())
}
