use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinitialize_existing_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let branch_file = repository_dir
        .path()
        .join(".minigit")
        .join("refs")
        .join("heads")
        .join("master");
    let head_commit = std::fs::read_to_string(&branch_file)?;
    let index = std::fs::read_to_string(repository_dir.path().join(".minigit").join("index"))?;

    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing minigit repository in ",
        ));

    assert_eq!(std::fs::read_to_string(&branch_file)?, head_commit);
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".minigit").join("index"))?,
        index
    );

    Ok(())
}
