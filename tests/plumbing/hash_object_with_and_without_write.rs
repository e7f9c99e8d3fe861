use crate::common::command::{repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const HELLO_OID: &str = "557db03de997c86a4a028e1ebd3a1ceb225be238";

#[rstest]
fn hash_object_with_and_without_write(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello World\n".to_string(),
    ));

    let object_path = repository_dir
        .path()
        .join(".minigit")
        .join("objects")
        .join(&HELLO_OID[..2])
        .join(&HELLO_OID[2..]);

    assert_eq!(
        stdout_of(repository_dir.path(), &["hash-object", "hello.txt"])?,
        format!("{HELLO_OID}\n")
    );
    assert!(!object_path.exists());

    assert_eq!(
        stdout_of(repository_dir.path(), &["hash-object", "-w", "hello.txt"])?,
        format!("{HELLO_OID}\n")
    );
    assert!(object_path.is_file());

    assert_eq!(
        stdout_of(repository_dir.path(), &["cat-file", "-p", HELLO_OID])?,
        "Hello World\n"
    );

    Ok(())
}
