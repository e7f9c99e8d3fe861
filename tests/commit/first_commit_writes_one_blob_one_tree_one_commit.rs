use crate::common::command::{commit_and_get_oid, repository_dir, run_minigit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use walkdir::WalkDir;

#[rstest]
fn first_commit_writes_one_blob_one_tree_one_commit(
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

    let commit_oid = commit_and_get_oid(repository_dir.path(), "First commit")?;

    let mut objects = WalkDir::new(repository_dir.path().join(".minigit").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let dir = entry.path().parent()?.file_name()?.to_str()?.to_string();
            Some(format!("{dir}{}", entry.file_name().to_str()?))
        })
        .collect::<Vec<_>>();
    objects.sort();

    let mut expected = vec![
        "557db03de997c86a4a028e1ebd3a1ceb225be238".to_string(),
        "97b49d4c943e3715fe30f141cc6f27a8548cee0e".to_string(),
        commit_oid.clone(),
    ];
    expected.sort();
    assert_eq!(objects, expected);

    let commit = stdout_of(repository_dir.path(), &["cat-file", "-p", &commit_oid])?;
    assert_eq!(
        commit.lines().next(),
        Some("tree 97b49d4c943e3715fe30f141cc6f27a8548cee0e")
    );
    assert!(!commit.contains("parent "));

    let log = stdout_of(repository_dir.path(), &["log", "--oneline"])?;
    assert_eq!(log, format!("{} First commit\n", &commit_oid[..7]));

    Ok(())
}
