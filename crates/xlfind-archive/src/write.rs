use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{Error, Result};

/// Builds a deflate container in memory.
///
/// Every entry is stamped with the DOS epoch and fixed permissions, so the
/// same entries written in the same order always yield the same bytes.
pub struct ArchiveWriter {
    inner:   ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    entries: usize,
}

impl Default for ArchiveWriter {
    fn default() -> Self { Self::new() }
}

impl ArchiveWriter {
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);
        Self {
            inner: ZipWriter::new(Cursor::new(Vec::new())),
            options,
            entries: 0,
        }
    }

    /// Write an in-memory payload as entry `name`.
    pub fn add_bytes(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.start(name)?;
        self.inner.write_all(data)?;
        Ok(())
    }

    /// Stream the file at `path` into entry `name` without buffering it whole.
    pub fn add_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let read_err = |e: io::Error| Error::SourceRead {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(read_err)?;
        self.start(name)?;
        io::copy(&mut file, &mut self.inner).map_err(read_err)?;
        Ok(())
    }

    pub fn add_directory(&mut self, name: &str) -> Result<()> {
        self.inner
            .add_directory(name, self.options)
            .map_err(|e| Error::Write {
                name: name.to_string(),
                source: e,
            })?;
        self.entries += 1;
        Ok(())
    }

    pub fn entry_count(&self) -> usize { self.entries }

    /// Write the central directory and hand back the container bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.inner.finish().map_err(|e| Error::Write {
            name: "<central directory>".to_string(),
            source: e,
        })?;
        Ok(cursor.into_inner())
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.inner
            .start_file(name, self.options)
            .map_err(|e| Error::Write {
                name: name.to_string(),
                source: e,
            })?;
        self.entries += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::open_bytes;

    #[test]
    fn entries_are_deflated() {
        let mut writer = ArchiveWriter::new();
        writer.add_bytes("a.xlsx", &[7u8; 4096]).unwrap();
        let data = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
        let file = archive.by_index(0).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);
        assert!(file.compressed_size() < 4096);
    }

    #[test]
    fn output_is_reproducible() {
        let build = || {
            let mut writer = ArchiveWriter::new();
            writer.add_bytes("one.xlsx", b"first").unwrap();
            writer.add_bytes("two.xls", b"second").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn add_file_streams_disk_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        std::fs::write(&path, b"on-disk content").unwrap();

        let mut writer = ArchiveWriter::new();
        writer.add_file("report.xlsx", &path).unwrap();
        assert_eq!(writer.entry_count(), 1);
        let data = writer.finish().unwrap();

        let mut source = open_bytes(&data).unwrap();
        let entries = source.entries().unwrap();
        assert_eq!(source.read_entry(&entries[0]).unwrap(), b"on-disk content");
    }

    #[test]
    fn add_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ArchiveWriter::new();
        let result = writer.add_file("gone.xlsx", dir.path().join("gone.xlsx"));
        assert!(matches!(result, Err(Error::SourceRead { .. })));
        assert_eq!(writer.entry_count(), 0);
    }
}
