//! Spreadsheet finder engine.
//!
//! Candidates come from a directory walk and from in-memory uploads
//! ([`source`]), are filtered by keyword ([`pattern`]), zip containers are
//! opened one level deep ([`probe()`]), and everything that matched is gathered
//! in discovery order ([`collect()`]) before being repackaged into a single zip
//! ([`pack()`]). [`search()`] ties the steps together for a form-like caller.

pub use cancel::CancellationToken;
pub use collect::{Collection, ScanReport, collect};
pub use error::{ArchiveReadError, InvalidInput, PackError, PatternError, SourceError};
pub use item::{ItemSource, MatchedItem, Payload, SearchResult};
pub use naming::resolve_collisions;
pub use package::pack;
pub use pattern::PatternSet;
pub use probe::{Probed, probe};
pub use search::{
    Found, FoundItem, OUTPUT_FILE_NAME, OUTPUT_MIME, SearchOptions, SearchOutcome, search,
    search_with,
};
pub use source::{Candidate, CandidateKind, Origin, Upload, enumerate};

pub mod cancel;
pub mod collect;
mod error;
pub mod item;
mod naming;
pub mod package;
pub mod pattern;
pub mod probe;
pub mod search;
pub mod source;
