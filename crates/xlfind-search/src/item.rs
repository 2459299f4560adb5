use std::path::PathBuf;

/// Where the bytes of a match come from when the output is packaged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// Read lazily at packaging time.
    FilesystemPath(PathBuf),
    /// Already materialized: an upload or an entry pulled out of a container.
    InMemoryBytes(Vec<u8>),
}

/// How a match was discovered; used when listing results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemSource {
    Plain { name: String },
    Archive { archive: String, entry: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedItem {
    pub arc_name: String,
    pub payload:  Payload,
    pub source:   ItemSource,
}

/// Matches in discovery order. Arc names are unique once produced by
/// [`collect`](crate::collect::collect).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    items: Vec<MatchedItem>,
}

impl SearchResult {
    pub fn new(items: Vec<MatchedItem>) -> Self { Self { items } }

    pub fn items(&self) -> &[MatchedItem] { &self.items }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchedItem> { self.items.iter() }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a MatchedItem;
    type IntoIter = std::slice::Iter<'a, MatchedItem>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}
