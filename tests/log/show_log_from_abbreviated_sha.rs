use crate::common::command::{repository_dir, stdout_of};
use crate::log::write_history;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::full_sha(40)]
#[case::abbreviated_sha(7)]
#[case::shortest_prefix(4)]
fn show_log_from_abbreviated_sha(
    repository_dir: TempDir,
    #[case] prefix_len: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let oids = write_history(repository_dir.path())?;

    let revision = &oids[1][..prefix_len];
    let expected_output = format!("{} Second\n{} First\n", &oids[1][..7], &oids[0][..7]);

    assert_eq!(
        stdout_of(repository_dir.path(), &["log", "--oneline", revision])?,
        expected_output
    );

    Ok(())
}
