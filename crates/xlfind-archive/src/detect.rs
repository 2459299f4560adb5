use std::io::{self, Read, Seek};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
}

/// Identify a container from its leading bytes.
///
/// Besides the local file header, an archive without entries starts directly
/// with the end-of-central-directory record, and split archives carry the
/// spanning marker first.
pub fn detect_format(data: &[u8]) -> Option<ArchiveFormat> {
    match data {
        [0x50, 0x4B, 0x03, 0x04, ..] => Some(ArchiveFormat::Zip),
        [0x50, 0x4B, 0x05, 0x06, ..] => Some(ArchiveFormat::Zip),
        [0x50, 0x4B, 0x07, 0x08, ..] => Some(ArchiveFormat::Zip),
        _ => None,
    }
}

/// Sniff the header of `reader` and rewind it.
///
/// Returns `Ok(None)` both for unknown signatures and for streams shorter
/// than a signature.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<ArchiveFormat>> {
    let mut header = Vec::with_capacity(4);
    reader.by_ref().take(4).read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(detect_format(&header))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_zip_format() {
        let zip_header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert_eq!(detect_format(&zip_header), Some(ArchiveFormat::Zip));
    }

    #[test]
    fn detect_empty_zip_format() {
        let eocd = [0x50, 0x4B, 0x05, 0x06, 0x00, 0x00];
        assert_eq!(detect_format(&eocd), Some(ArchiveFormat::Zip));
    }

    #[test]
    fn detect_gzip_is_unsupported() {
        let gz_header = [0x1F, 0x8B, 0x08, 0x00];
        assert_eq!(detect_format(&gz_header), None);
    }

    #[test]
    fn detect_short_input() {
        assert_eq!(detect_format(&[0x50, 0x4B]), None);
        assert_eq!(detect_format(&[]), None);
    }

    #[test]
    fn detect_from_reader_rewinds() {
        let data = vec![0x50, 0x4B, 0x03, 0x04, 0xAA, 0xBB];
        let mut cursor = io::Cursor::new(data);
        let format = detect_from_reader(&mut cursor).unwrap();
        assert_eq!(format, Some(ArchiveFormat::Zip));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn detect_from_short_reader() {
        let mut cursor = io::Cursor::new(vec![0x50]);
        assert_eq!(detect_from_reader(&mut cursor).unwrap(), None);
    }
}
