//! Candidate enumeration over a directory tree and uploaded blobs.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SourceError;

pub const SPREADSHEET_EXTENSIONS: [&str; 3] = [".xlsx", ".xls", ".xlsm"];
pub const ARCHIVE_EXTENSION: &str = ".zip";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateKind {
    PlainFile,
    ArchiveFile,
}

impl CandidateKind {
    /// Classify by extension, ignoring case. Names that are neither a
    /// spreadsheet nor a zip yield `None` and are dropped.
    pub fn classify(name: &str) -> Option<Self> {
        if is_spreadsheet(name) {
            Some(Self::PlainFile)
        } else if name.to_lowercase().ends_with(ARCHIVE_EXTENSION) {
            Some(Self::ArchiveFile)
        } else {
            None
        }
    }
}

pub fn is_spreadsheet(name: &str) -> bool {
    let name = name.to_lowercase();
    SPREADSHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    FilesystemPath(PathBuf),
    InMemory(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub display_name: String,
    pub kind:         CandidateKind,
    pub origin:       Origin,
}

/// A file handed over by the caller instead of living on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Lazily yield candidates: every file under `root` first, in file-name
/// order at each level, then one candidate per upload in the given order.
///
/// A missing root, or one that is not a directory, contributes nothing.
/// Entries the walk cannot read come through as `Err` so the caller can
/// report them and keep going.
pub fn enumerate(
    root: Option<&Path>,
    uploads: Vec<Upload>,
) -> impl Iterator<Item = Result<Candidate, SourceError>> {
    let walk = root
        .filter(|root| root.is_dir())
        .map(|root| WalkDir::new(root).follow_links(false).sort_by_file_name());

    let from_disk = walk.into_iter().flatten().filter_map(|entry| match entry {
        Ok(entry) => disk_candidate(entry).map(Ok),
        Err(e) => Some(Err(SourceError::from(e))),
    });

    let from_uploads = uploads.into_iter().filter_map(upload_candidate).map(Ok);

    from_disk.chain(from_uploads)
}

fn disk_candidate(entry: walkdir::DirEntry) -> Option<Candidate> {
    if entry.file_type().is_dir() {
        return None;
    }
    // symlinked files count when they resolve to a regular file
    if !entry.file_type().is_file() && !entry.path().is_file() {
        return None;
    }

    let display_name = entry.file_name().to_string_lossy().into_owned();
    let kind = CandidateKind::classify(&display_name)?;
    tracing::trace!(path = %entry.path().display(), ?kind, "disk candidate");
    Some(Candidate {
        display_name,
        kind,
        origin: Origin::FilesystemPath(entry.into_path()),
    })
}

fn upload_candidate(upload: Upload) -> Option<Candidate> {
    let display_name = upload_display_name(&upload.name).to_string();
    if display_name.is_empty() {
        tracing::warn!(name = %upload.name, "ignoring upload without a file name");
        return None;
    }

    let kind = CandidateKind::classify(&display_name)?;
    Some(Candidate {
        display_name,
        kind,
        origin: Origin::InMemory(upload.data),
    })
}

/// Browsers may send a client-side path; only the last component is kept.
fn upload_display_name(name: &str) -> &str {
    let name = name.trim();
    match name.rfind(['/', '\\']) {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
