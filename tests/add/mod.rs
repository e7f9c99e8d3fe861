mod add_files_from_nested_directories_to_index_successfully;
mod add_generated_files_to_index_successfully;
mod add_single_file_to_index_successfully;

use std::collections::BTreeMap;
use std::path::Path;

/// Staged paths and blob IDs, as saved in `.minigit/index`
pub fn read_index(repository_dir: &Path) -> Result<BTreeMap<String, String>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(repository_dir.join(".minigit").join("index"))?;

    Ok(serde_json::from_str(&content)?)
}
