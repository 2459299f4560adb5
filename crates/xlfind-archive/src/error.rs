use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("container is empty")]
    Empty,

    #[error("not a zip container")]
    UnsupportedFormat,

    #[error("archive is corrupted")]
    Corrupted,

    #[error("failed to open entry '{entry}': {source}")]
    EntryOpen {
        entry: String,
        source: zip::result::ZipError,
    },

    #[error("failed to read entry '{entry}': {source}")]
    EntryRead { entry: String, source: io::Error },

    #[error("failed to read '{path}': {source}")]
    SourceRead { path: PathBuf, source: io::Error },

    #[error("failed to write entry '{name}': {source}")]
    Write {
        name: String,
        source: zip::result::ZipError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
