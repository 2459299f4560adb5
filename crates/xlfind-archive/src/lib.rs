//! Zip container access for the xlfind engine.
//!
//! # Architecture
//!
//! - `detect.rs` - Signature sniffing, used to explain why a container failed to open
//! - `entry.rs` - Entry metadata and in-memory extracted entries
//! - `read.rs` - Opening a container from disk or memory and pulling selected entries
//! - `write.rs` - Building a new deflate container with reproducible bytes

pub use detect::{ArchiveFormat, detect_format, detect_from_reader};
pub use entry::{ArchiveEntry, ExtractedEntry, Extraction, entry_base_name};
pub use error::{Error, Result};
pub use read::{ZipSource, open_bytes, open_path};
pub use write::ArchiveWriter;

mod detect;
mod entry;
mod error;
mod read;
mod write;
