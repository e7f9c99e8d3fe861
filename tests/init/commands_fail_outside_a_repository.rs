use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["add", "."])]
#[case(&["diff"])]
fn commands_fail_outside_a_repository(repository_dir: TempDir, #[case] args: &[&str]) {
    run_minigit_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a minigit repository"));

    assert!(!repository_dir.path().join(".minigit").exists());
}
