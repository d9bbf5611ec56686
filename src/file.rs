//! File and directory manipulation utilities.

use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::de::DeserializeOwned;
use serde_json::from_reader;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

/// Lists the `.csv` files directly inside `dir`, sorted by name for deterministic batch
/// order.
pub fn csv_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, io::Error> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("csv")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
