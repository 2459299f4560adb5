/// Metadata of one container entry, read from the central directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub index: usize,
    pub path: String,
    pub size: u64,
    pub is_directory: bool,
}

impl ArchiveEntry {
    pub fn base_name(&self) -> &str { entry_base_name(&self.path) }
}

/// An entry pulled out of a container. Owns its bytes, so the container
/// handle can be dropped as soon as extraction finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub path: String,
    pub data: Vec<u8>,
}

impl ExtractedEntry {
    pub fn base_name(&self) -> &str { entry_base_name(&self.path) }
}

/// Result of pulling selected entries out of a container. An entry that fails
/// to decompress is recorded in `failures` and the remaining entries are still
/// read.
#[derive(Debug, Default)]
pub struct Extraction {
    pub entries: Vec<ExtractedEntry>,
    pub failures: Vec<crate::Error>,
}

/// Last component of an entry path. Archives written on Windows may use
/// backslashes, so both separators count.
pub fn entry_base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    match trimmed.rfind(['/', '\\']) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_of_nested_entry() {
        assert_eq!(entry_base_name("folder/sales.xlsx"), "sales.xlsx");
        assert_eq!(entry_base_name("a/b/c/report.xls"), "report.xls");
    }

    #[test]
    fn base_name_of_top_level_entry() {
        assert_eq!(entry_base_name("sales.xlsx"), "sales.xlsx");
    }

    #[test]
    fn base_name_with_backslashes() {
        assert_eq!(entry_base_name("dir\\sub\\po123.xls"), "po123.xls");
    }

    #[test]
    fn base_name_of_directory_entry() {
        assert_eq!(entry_base_name("folder/nested/"), "nested");
    }

    #[test]
    fn entry_fields() {
        let entry = ArchiveEntry {
            index: 3,
            path: "data/po123.xls".to_string(),
            size: 1024,
            is_directory: false,
        };
        assert_eq!(entry.index, 3);
        assert_eq!(entry.base_name(), "po123.xls");
        assert!(!entry.is_directory);
    }

    #[test]
    fn extracted_entry_base_name() {
        let entry = ExtractedEntry {
            path: "x/y.xlsm".to_string(),
            data: vec![1, 2, 3],
        };
        assert_eq!(entry.base_name(), "y.xlsm");
        assert_eq!(entry.data.len(), 3);
    }
}
