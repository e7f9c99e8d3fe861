use crate::add::read_index;
use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_generated_files_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(&repository_dir.path().join("docs"), 8);

    // stage in two rounds; the second add must keep what the first one staged
    run_minigit_command(repository_dir.path(), &["add", "docs"])
        .assert()
        .success();
    run_minigit_command(repository_dir.path(), &["add", "docs"])
        .assert()
        .success();

    let index = read_index(repository_dir.path())?;
    let mut expected = files
        .iter()
        .map(|file| {
            file.path
                .strip_prefix(repository_dir.path())
                .map(|path| path.display().to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;
    expected.sort();

    assert_eq!(index.keys().cloned().collect::<Vec<_>>(), expected);

    Ok(())
}
