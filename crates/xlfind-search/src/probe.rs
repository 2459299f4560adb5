use std::path::Path;

use xlfind_archive::{ArchiveEntry, open_bytes, open_path};

use crate::error::ArchiveReadError;
use crate::item::{ItemSource, MatchedItem, Payload};
use crate::pattern::PatternSet;
use crate::source::{Candidate, Origin, is_spreadsheet};

/// What one zip candidate contributed to the scan.
#[derive(Debug, Default)]
pub struct Probed {
    pub items:  Vec<MatchedItem>,
    /// One error for a container that could not be opened, otherwise one per
    /// matched entry that failed to decompress.
    pub errors: Vec<ArchiveReadError>,
}

/// Open a zip candidate and pull out every spreadsheet entry whose base name
/// matches `patterns`.
///
/// Matched entries are named `<archive stem>_<entry base name>`; duplicates
/// are left for the collector to resolve. Zips nested inside the container
/// are not opened. A damaged entry is reported without dropping the entries
/// that did read. The container is closed before this returns.
pub fn probe(candidate: &Candidate, patterns: &PatternSet) -> Probed {
    let select = |entry: &ArchiveEntry| {
        let name = entry.base_name();
        is_spreadsheet(name) && patterns.matches(name)
    };
    let failed = |source: xlfind_archive::Error| ArchiveReadError {
        name: candidate.display_name.clone(),
        source,
    };

    let extracted = match &candidate.origin {
        Origin::FilesystemPath(path) => open_path(path).and_then(|mut zip| zip.extract_where(select)),
        Origin::InMemory(data) => open_bytes(data).and_then(|mut zip| zip.extract_where(select)),
    };
    let extracted = match extracted {
        Ok(extracted) => extracted,
        Err(source) => {
            return Probed {
                items:  Vec::new(),
                errors: vec![failed(source)],
            };
        }
    };

    let stem = archive_stem(&candidate.display_name);
    let items = extracted
        .entries
        .into_iter()
        .map(|entry| {
            let arc_name = format!("{stem}_{}", entry.base_name());
            MatchedItem {
                arc_name,
                payload: Payload::InMemoryBytes(entry.data),
                source: ItemSource::Archive {
                    archive: candidate.display_name.clone(),
                    entry:   entry.path,
                },
            }
        })
        .collect::<Vec<_>>();
    let errors = extracted.failures.into_iter().map(failed).collect::<Vec<_>>();

    tracing::debug!(
        archive = %candidate.display_name,
        matches = items.len(),
        failed_entries = errors.len(),
        "probed archive"
    );
    Probed { items, errors }
}

fn archive_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
