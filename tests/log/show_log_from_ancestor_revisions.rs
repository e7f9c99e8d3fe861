use crate::common::command::{repository_dir, stdout_of};
use crate::log::write_history;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("HEAD", &["Third", "Second", "First"])]
#[case("master", &["Third", "Second", "First"])]
#[case("@^", &["Second", "First"])]
#[case("HEAD~2", &["First"])]
#[case("master^^", &["First"])]
fn show_log_from_ancestor_revisions(
    repository_dir: TempDir,
    #[case] revision: &str,
    #[case] expected_messages: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    write_history(repository_dir.path())?;

    let stdout = stdout_of(repository_dir.path(), &["log", "--oneline", revision])?;
    let messages = stdout
        .lines()
        .filter_map(|line| line.split_once(' ').map(|(_, message)| message))
        .collect::<Vec<_>>();

    assert_eq!(messages, expected_messages);

    Ok(())
}
