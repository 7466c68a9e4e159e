use std::path::{Path, PathBuf};

/// Every `.json` file under `folder_path`, nested folders included, sorted by path.
pub fn read_scenario_files(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if path.extension().is_some_and(|extension| extension == "json") {
                files.push(path);
            }
        } else if path.is_dir() {
            files.extend(read_scenario_files(&path)?);
        }
    }

    files.sort();

    Ok(files)
}
