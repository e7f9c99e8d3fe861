use crate::common::command::{repository_dir, stdout_of};
use crate::log::write_history;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_oneline_format(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let oids = write_history(repository_dir.path())?;

    let expected_output = format!(
        "{} Third\n{} Second\n{} First\n",
        &oids[2][..7],
        &oids[1][..7],
        &oids[0][..7]
    );
    assert_eq!(
        stdout_of(repository_dir.path(), &["log", "--oneline"])?,
        expected_output
    );

    Ok(())
}
