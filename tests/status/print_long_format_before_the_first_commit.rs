use crate::common::command::{repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_long_format_before_the_first_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        "Hello World\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "hello.txt"])
        .assert()
        .success();

    let expected_output = r#"On branch master

No commits yet

Changes to be committed:
  (use "minigit rm <file>..." to unstage)
        new file:   hello.txt
"#;
    let actual_output = stdout_of(repository_dir.path(), &["status"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
