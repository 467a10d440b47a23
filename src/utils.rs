use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::error;

/// Regular files directly inside `path`, sorted by file name.
pub fn scan_for_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut files = vec![];
    for dir_entry in std::fs::read_dir(path).map_err(io_error)? {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(e) => {
                error!(path = %path.display(), "Failed to read directory entry: {:?}", e);
                continue;
            }
        };

        let is_file = dir_entry
            .file_type()
            .map(|file_type| file_type.is_file())
            .unwrap_or(false);

        if is_file {
            files.push(dir_entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Parses every file, logging and skipping the ones that fail.
pub fn parse_files<T>(files: Vec<PathBuf>, parse_fn: impl Fn(&Path) -> Result<T>) -> Vec<T> {
    let mut results = vec![];

    for path in files {
        match parse_fn(&path) {
            Ok(result) => results.push(result),
            Err(e) => error!(path = %path.display(), "ParseError: {:?}", e),
        }
    }

    results
}
