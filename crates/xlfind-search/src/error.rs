use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("no keywords given")]
    EmptyPatternSet,
}

/// Rejections raised before any scanning starts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("folder '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("'{0}' is not a folder")]
    RootNotDirectory(PathBuf),

    #[error("enter at least one keyword")]
    EmptyKeywords,

    #[error("nothing to search: no folder and no uploaded files")]
    NoSources,
}

impl From<PatternError> for InvalidInput {
    fn from(e: PatternError) -> Self {
        match e {
            PatternError::EmptyPatternSet => Self::EmptyKeywords,
        }
    }
}

/// A container that could not be opened or read. The scan carries on.
#[derive(Debug, thiserror::Error)]
#[error("cannot read archive '{name}': {source}")]
pub struct ArchiveReadError {
    pub name: String,
    #[source]
    pub source: xlfind_archive::Error,
}

/// A directory entry the walk could not visit.
#[derive(Debug, thiserror::Error)]
#[error("skipped '{path}': {source}")]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

impl From<walkdir::Error> for SourceError {
    fn from(e: walkdir::Error) -> Self {
        Self {
            path: e.path().map(|p| p.to_path_buf()).unwrap_or_default(),
            source: e,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("nothing to package: the result set is empty")]
    EmptyResultSet,

    #[error(transparent)]
    Archive(#[from] xlfind_archive::Error),
}
