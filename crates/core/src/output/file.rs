use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use super::error::{OutputError, Result};

/// Resolves `<output_dir>/<file_name>.csv`, or `<file_name>.csv` relative to
/// the working directory when `output_dir` is empty.
pub fn csv_file_path(output_dir: &str, file_name: &str) -> PathBuf {
    let file = format!("{file_name}.csv");
    if output_dir.is_empty() {
        PathBuf::from(file)
    } else {
        Path::new(output_dir).join(file)
    }
}

/// Opens the CSV file for appending, creating `output_dir` (and its parents)
/// and the file itself when missing. Existing content is never truncated.
pub fn open_csv_for_append(output_dir: &str, file_name: &str) -> Result<File> {
    if file_name.is_empty() {
        return Err(OutputError::EmptyFileName);
    }

    if !output_dir.is_empty() {
        fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
            path: PathBuf::from(output_dir),
            source,
        })?;
    }

    let path = csv_file_path(output_dir, file_name);

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let file = options
        .open(&path)
        .map_err(|source| OutputError::Open {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "Opened CSV file for appending");

    Ok(file)
}
