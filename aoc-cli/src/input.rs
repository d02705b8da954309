//! Locating and loading puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name for a year/day input: `{year}_day{day:02}.txt`
pub fn input_file_name(year: u16, day: u8) -> String {
    format!("{}_day{:02}.txt", year, day)
}

/// Path of the year/day input inside `input_dir`
pub fn default_input_path(input_dir: &Path, year: u16, day: u8) -> PathBuf {
    input_dir.join(input_file_name(year, day))
}

/// Read the whole input file
pub fn read_input(path: &Path) -> Result<String, InputError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "loaded input");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path.to_path_buf())),
        Err(source) => Err(InputError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
