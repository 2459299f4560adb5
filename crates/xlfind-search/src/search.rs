//! Entry point for the form layer.

use std::path::{Path, PathBuf};

use crate::cancel::CancellationToken;
use crate::collect::{ScanReport, collect};
use crate::error::{InvalidInput, PackError};
use crate::item::{ItemSource, SearchResult};
use crate::package::pack;
use crate::pattern::PatternSet;
use crate::source::{Upload, enumerate};

/// Conventional file name of the packaged download.
pub const OUTPUT_FILE_NAME: &str = "excel_results.zip";
pub const OUTPUT_MIME: &str = "application/zip";

#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub parallel: bool,
    pub cancel:   CancellationToken,
}

impl SearchOptions {
    /// Open containers on the rayon pool instead of one by one.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    InvalidInput(InvalidInput),
    Empty(ScanReport),
    Found(Found),
}

/// One row of the result listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundItem {
    /// File name, or the entry's path inside its container.
    pub label:           String,
    pub is_from_archive: bool,
    pub archive_label:   Option<String>,
    /// Name of the entry in the packaged download.
    pub arc_name:        String,
}

#[derive(Debug)]
pub struct Found {
    items:  Vec<FoundItem>,
    result: SearchResult,
    report: ScanReport,
}

impl Found {
    fn new(result: SearchResult, report: ScanReport) -> Self {
        let items = result
            .iter()
            .map(|item| match &item.source {
                ItemSource::Plain { name } => FoundItem {
                    label:           name.clone(),
                    is_from_archive: false,
                    archive_label:   None,
                    arc_name:        item.arc_name.clone(),
                },
                ItemSource::Archive { archive, entry } => FoundItem {
                    label:           entry.clone(),
                    is_from_archive: true,
                    archive_label:   Some(archive.clone()),
                    arc_name:        item.arc_name.clone(),
                },
            })
            .collect();
        Self {
            items,
            result,
            report,
        }
    }

    pub fn items(&self) -> &[FoundItem] { &self.items }

    pub fn result(&self) -> &SearchResult { &self.result }

    pub fn report(&self) -> &ScanReport { &self.report }

    /// Package the matches. Nothing is read or compressed until this is
    /// called, and each call packages afresh.
    pub fn archive_bytes(&self) -> Result<Vec<u8>, PackError> { pack(&self.result) }
}

/// Run a search with default options. See [`search_with`].
pub fn search<S: AsRef<str>>(
    root: Option<&str>,
    uploads: Vec<Upload>,
    raw_keyword_lines: &[S],
) -> SearchOutcome {
    search_with(root, uploads, raw_keyword_lines, &SearchOptions::default())
}

/// Validate the form input, scan every source and gather matches.
///
/// A blank `root` means "no folder". A non-blank root must exist and be a
/// directory. Keywords are validated after the folder.
///
/// A missing folder is only acceptable when files were uploaded instead: with
/// neither source the form is incomplete, so the call returns
/// [`InvalidInput::NoSources`] rather than an empty outcome.
pub fn search_with<S: AsRef<str>>(
    root: Option<&str>,
    uploads: Vec<Upload>,
    raw_keyword_lines: &[S],
    options: &SearchOptions,
) -> SearchOutcome {
    let root = match validate_root(root) {
        Ok(root) => root,
        Err(e) => return SearchOutcome::InvalidInput(e),
    };
    let patterns = match PatternSet::build(raw_keyword_lines) {
        Ok(patterns) => patterns,
        Err(e) => return SearchOutcome::InvalidInput(e.into()),
    };
    if root.is_none() && uploads.is_empty() {
        return SearchOutcome::InvalidInput(InvalidInput::NoSources);
    }

    tracing::info!(
        root = ?root,
        uploads = uploads.len(),
        keywords = patterns.len(),
        "starting search"
    );
    let candidates = enumerate(root.as_deref(), uploads);
    let collection = collect(candidates, &patterns, options);

    if collection.result.is_empty() {
        SearchOutcome::Empty(collection.report)
    } else {
        SearchOutcome::Found(Found::new(collection.result, collection.report))
    }
}

fn validate_root(root: Option<&str>) -> Result<Option<PathBuf>, InvalidInput> {
    let Some(root) = root.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };

    let path = Path::new(root);
    if !path.exists() {
        return Err(InvalidInput::RootNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(InvalidInput::RootNotDirectory(path.to_path_buf()));
    }
    Ok(Some(path.to_path_buf()))
}
