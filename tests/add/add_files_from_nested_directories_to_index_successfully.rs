use crate::add::read_index;
use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "1.txt", "a"])
        .assert()
        .success();

    let index = read_index(repository_dir.path())?;
    let expected: BTreeMap<String, String> = [
        ("1.txt", "43dd47ea691c90a5fa7827892c70241913351963"),
        ("a/2.txt", "64c5e5885a4b06010b3a0c20edb7900dd0311025"),
        ("a/b/3.txt", "1d19714ffbc272ba0da6eb419d66123c20527174"),
    ]
    .into_iter()
    .map(|(path, oid)| (path.to_string(), oid.to_string()))
    .collect();

    assert_eq!(index, expected);

    Ok(())
}
