//! Classification of candidates into a single ordered result.

use rayon::prelude::*;

use crate::error::{ArchiveReadError, SourceError};
use crate::item::{ItemSource, MatchedItem, Payload, SearchResult};
use crate::naming::resolve_collisions;
use crate::pattern::PatternSet;
use crate::probe::{Probed, probe};
use crate::search::SearchOptions;
use crate::source::{Candidate, CandidateKind, Origin};

/// Everything that went wrong without stopping the scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub archive_errors: Vec<ArchiveReadError>,
    pub skipped:        Vec<SourceError>,
    /// The scan stopped early; results cover only the candidates seen so far.
    pub cancelled:      bool,
}

impl ScanReport {
    pub fn has_warnings(&self) -> bool {
        !self.archive_errors.is_empty() || !self.skipped.is_empty() || self.cancelled
    }
}

#[derive(Debug, Default)]
pub struct Collection {
    pub result: SearchResult,
    pub report: ScanReport,
}

/// Outcome of looking at a single candidate.
enum Step {
    Matched(Vec<MatchedItem>),
    Probed(Probed),
    Skipped(SourceError),
    Cancelled,
}

/// Filter `candidates` through `patterns`, opening zip candidates along the
/// way.
///
/// Matches keep discovery order and get unique arc names before returning.
/// Unreadable archives and directory entries are recorded in the report.
/// The cancellation token is checked before each candidate.
pub fn collect<I>(candidates: I, patterns: &PatternSet, options: &SearchOptions) -> Collection
where
    I: IntoIterator<Item = Result<Candidate, SourceError>>,
{
    let mut items = Vec::new();
    let mut report = ScanReport::default();

    if options.parallel {
        collect_parallel(candidates, patterns, options, &mut items, &mut report);
    } else {
        for candidate in candidates {
            let step = if options.cancel.is_cancelled() {
                Step::Cancelled
            } else {
                evaluate(candidate, patterns)
            };
            if !merge(step, &mut items, &mut report) {
                break;
            }
        }
    }

    resolve_collisions(&mut items);
    tracing::info!(
        matches = items.len(),
        archive_errors = report.archive_errors.len(),
        skipped = report.skipped.len(),
        cancelled = report.cancelled,
        "scan finished"
    );

    Collection {
        result: SearchResult::new(items),
        report,
    }
}

/// Probe containers on the rayon pool. The walk finishes first, then steps
/// are merged back in candidate order so the output matches a sequential run.
///
/// The walk stops at the first cancelled check. Plain files that were already
/// discovered are kept; a container not yet probed when the token trips
/// becomes [`Step::Cancelled`] and ends the merge there.
fn collect_parallel<I>(
    candidates: I,
    patterns: &PatternSet,
    options: &SearchOptions,
    items: &mut Vec<MatchedItem>,
    report: &mut ScanReport,
) where
    I: IntoIterator<Item = Result<Candidate, SourceError>>,
{
    let mut pending = Vec::new();
    for candidate in candidates {
        if options.cancel.is_cancelled() {
            break;
        }
        pending.push(candidate);
    }
    let walk_cancelled = options.cancel.is_cancelled();

    let steps: Vec<Step> = pending
        .into_par_iter()
        .map(|candidate| {
            let is_archive = matches!(&candidate, Ok(c) if c.kind == CandidateKind::ArchiveFile);
            if is_archive && options.cancel.is_cancelled() {
                Step::Cancelled
            } else {
                evaluate(candidate, patterns)
            }
        })
        .collect();

    for step in steps {
        if !merge(step, items, report) {
            return;
        }
    }
    report.cancelled |= walk_cancelled;
}

fn evaluate(candidate: Result<Candidate, SourceError>, patterns: &PatternSet) -> Step {
    let candidate = match candidate {
        Ok(candidate) => candidate,
        Err(e) => return Step::Skipped(e),
    };

    match candidate.kind {
        CandidateKind::PlainFile => {
            if !patterns.matches(&candidate.display_name) {
                return Step::Matched(Vec::new());
            }
            tracing::debug!(name = %candidate.display_name, "matched file");
            let payload = match candidate.origin {
                Origin::FilesystemPath(path) => Payload::FilesystemPath(path),
                Origin::InMemory(data) => Payload::InMemoryBytes(data),
            };
            Step::Matched(vec![MatchedItem {
                arc_name: candidate.display_name.clone(),
                payload,
                source: ItemSource::Plain {
                    name: candidate.display_name,
                },
            }])
        }
        CandidateKind::ArchiveFile => Step::Probed(probe(&candidate, patterns)),
    }
}

/// Fold one step into the running result. Returns `false` once the scan
/// should stop.
fn merge(step: Step, items: &mut Vec<MatchedItem>, report: &mut ScanReport) -> bool {
    match step {
        Step::Matched(found) => items.extend(found),
        Step::Probed(Probed { items: found, errors }) => {
            items.extend(found);
            for e in errors {
                tracing::warn!(archive = %e.name, error = %e.source, "skipping unreadable archive content");
                report.archive_errors.push(e);
            }
        }
        Step::Skipped(e) => {
            tracing::warn!(path = %e.path.display(), error = %e.source, "skipping unreadable entry");
            report.skipped.push(e);
        }
        Step::Cancelled => {
            tracing::info!("scan cancelled");
            report.cancelled = true;
            return false;
        }
    }
    true
}
