use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::error::Result;

#[derive(Error, Debug)]
pub struct InputNotFoundError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl std::fmt::Display for InputNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Input file {} does not exist or is not readable",
            self.path.display()
        )
    }
}

#[derive(Error, Debug)]
pub struct OutputWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl std::fmt::Display for OutputWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to write output file {}", self.path.display())
    }
}

/// Read the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        InputNotFoundError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Create or truncate `path` and write `contents` to it. There is no temporary file, so a
/// failure part way through can leave a truncated output behind.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| {
        OutputWriteError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
