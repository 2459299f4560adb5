use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::detect::detect_from_reader;
use crate::entry::{ArchiveEntry, ExtractedEntry, Extraction};
use crate::error::{Error, Result};

/// An open zip container. Dropping it releases the underlying reader.
pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl<R: Read + Seek> ZipSource<R> {
    /// Parse the central directory of `reader`.
    ///
    /// Failures are classified so callers can tell an empty upload from a
    /// file that is not a zip at all and from a damaged zip.
    pub fn open(mut reader: R) -> Result<Self> {
        let mut probe = [0u8; 1];
        let is_empty = reader.read(&mut probe)? == 0;
        reader.rewind()?;
        if is_empty {
            return Err(Error::Empty);
        }

        let format = detect_from_reader(&mut reader)?;
        match zip::ZipArchive::new(reader) {
            Ok(archive) => {
                tracing::trace!(entries = archive.len(), "opened zip container");
                Ok(Self { archive })
            }
            Err(_) if format.is_none() => Err(Error::UnsupportedFormat),
            Err(_) => Err(Error::Corrupted),
        }
    }

    pub fn len(&self) -> usize { self.archive.len() }

    pub fn is_empty(&self) -> bool { self.archive.is_empty() }

    /// List entry metadata in central-directory order without decompressing
    /// anything.
    pub fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let file = self.archive.by_index_raw(index).map_err(|_| Error::Corrupted)?;
            entries.push(ArchiveEntry {
                index,
                path: file.name().to_string(),
                size: file.size(),
                is_directory: file.is_dir(),
            });
        }
        Ok(entries)
    }

    /// Decompress a single entry fully into memory.
    pub fn read_entry(&mut self, entry: &ArchiveEntry) -> Result<Vec<u8>> {
        let mut file = self.archive.by_index(entry.index).map_err(|e| Error::EntryOpen {
            entry: entry.path.clone(),
            source: e,
        })?;

        // The declared size is untrusted, so it only seeds the allocation.
        let mut content = Vec::with_capacity(entry.size.min(16 * 1024 * 1024) as usize);
        file.read_to_end(&mut content).map_err(|e| Error::EntryRead {
            entry: entry.path.clone(),
            source: e,
        })?;
        Ok(content)
    }

    /// Extract every non-directory entry accepted by `select`, in
    /// central-directory order. Entries that are rejected are never
    /// decompressed.
    ///
    /// Only an unreadable central directory fails the call. A selected entry
    /// that cannot be decompressed lands in [`Extraction::failures`] and does
    /// not discard the entries around it.
    pub fn extract_where<F>(&mut self, mut select: F) -> Result<Extraction>
    where
        F: FnMut(&ArchiveEntry) -> bool,
    {
        let mut extraction = Extraction::default();
        for entry in self.entries()? {
            if entry.is_directory || !select(&entry) {
                continue;
            }
            match self.read_entry(&entry) {
                Ok(data) => extraction.entries.push(ExtractedEntry {
                    path: entry.path,
                    data,
                }),
                Err(e) => {
                    tracing::debug!(entry = %entry.path, error = %e, "entry extraction failed");
                    extraction.failures.push(e);
                }
            }
        }
        Ok(extraction)
    }
}

/// Open a container stored on disk.
pub fn open_path(path: impl AsRef<Path>) -> Result<ZipSource<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    ZipSource::open(BufReader::new(file))
}

/// Open a container held in memory.
pub fn open_bytes(data: &[u8]) -> Result<ZipSource<Cursor<&[u8]>>> { ZipSource::open(Cursor::new(data)) }
