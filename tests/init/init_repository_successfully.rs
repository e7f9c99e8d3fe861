use crate::common;
use assert_cmd::Command;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("minigit")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty minigit repository in .+\.minigit\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let git_dir = dir.path().join(".minigit");
    assert!(git_dir.join("objects").is_dir());
    assert!(git_dir.join("refs").join("heads").is_dir());
    assert_eq!(
        std::fs::read_to_string(git_dir.join("HEAD"))?,
        "ref: refs/heads/master\n"
    );
    // the branch file only appears with the first commit
    assert!(!git_dir.join("refs").join("heads").join("master").exists());

    Ok(())
}
