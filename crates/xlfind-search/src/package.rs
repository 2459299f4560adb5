use xlfind_archive::ArchiveWriter;

use crate::error::PackError;
use crate::item::{Payload, SearchResult};

/// Serialize `result` into one deflate zip, entries in result order.
///
/// Files found on disk are streamed in at this point; an empty result is a
/// caller error since the `Empty` outcome should have been handled first.
pub fn pack(result: &SearchResult) -> Result<Vec<u8>, PackError> {
    if result.is_empty() {
        return Err(PackError::EmptyResultSet);
    }

    let mut writer = ArchiveWriter::new();
    for item in result {
        match &item.payload {
            Payload::FilesystemPath(path) => writer.add_file(&item.arc_name, path)?,
            Payload::InMemoryBytes(data) => writer.add_bytes(&item.arc_name, data)?,
        }
    }

    tracing::debug!(entries = writer.entry_count(), "packaged results");
    Ok(writer.finish()?)
}
