// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference lists of allowed attribute value tuples

use crate::{CheckError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Ordered set of allowed value tuples
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceList {
    rows: Vec<Vec<String>>,
    lookup: FxHashSet<Vec<String>>,
}

impl ReferenceList {
    /// Build a list from rows, dropping duplicates but keeping first-seen order
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for row in rows {
            list.push(row.into_iter().map(Into::into).collect());
        }
        list
    }

    fn push(&mut self, row: Vec<String>) {
        if self.lookup.insert(row.clone()) {
            self.rows.push(row);
        }
    }

    /// Whether the exact tuple is allowed
    pub fn contains(&self, tuple: &[String]) -> bool {
        self.lookup.contains(tuple)
    }

    /// Rows in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of distinct rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Source of reference lists
pub trait ReferenceSource: Send + Sync {
    /// Read the list at `path`
    fn load(&self, path: &Path) -> Result<ReferenceList>;
}

/// Headerless CSV files, one tuple per record
///
/// Records may differ in length; a tuple only matches a record of the same
/// arity.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvReferenceSource;

impl CsvReferenceSource {
    /// Read CSV records from any reader
    pub fn read<R: Read>(reader: R) -> std::result::Result<ReferenceList, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut list = ReferenceList::default();
        for record in csv_reader.records() {
            let record = record?;
            list.push(record.iter().map(str::to_string).collect());
        }
        Ok(list)
    }
}

impl ReferenceSource for CsvReferenceSource {
    fn load(&self, path: &Path) -> Result<ReferenceList> {
        let error = |reason: String| CheckError::ReferenceList {
            locator: path.display().to_string(),
            reason,
        };
        let file = std::fs::File::open(path).map_err(|e| error(e.to_string()))?;
        Self::read(file).map_err(|e| error(e.to_string()))
    }
}

/// Reference list access with optional per-model caching
pub struct ReferenceLists {
    source: Box<dyn ReferenceSource>,
    cache: Option<FxHashMap<String, Arc<ReferenceList>>>,
}

impl ReferenceLists {
    /// Wrap a source; `cache` keeps lists until [`ReferenceLists::clear`]
    pub fn new(source: Box<dyn ReferenceSource>, cache: bool) -> Self {
        Self {
            source,
            cache: cache.then(FxHashMap::default),
        }
    }

    /// List at `path`, read from the source unless cached
    pub fn get(&mut self, path: &Path) -> Result<Arc<ReferenceList>> {
        let key = path.to_string_lossy().into_owned();
        if let Some(list) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            return Ok(Arc::clone(list));
        }

        let list = Arc::new(self.source.load(path)?);
        log::debug!("read {} reference rows from {}", list.len(), key);
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(key, Arc::clone(&list));
        }
        Ok(list)
    }

    /// Drop cached lists
    pub fn clear(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}

impl fmt::Debug for ReferenceLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceLists")
            .field("cached", &self.cache.as_ref().map(|cache| cache.len()))
            .finish()
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self::new(Box::new(CsvReferenceSource), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tuple(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_read_csv() {
        let list = CsvReferenceSource::read("A,1\nB,2\n\"C, D\",3,extra\nA,1\n".as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains(&tuple(&["A", "1"])));
        assert!(list.contains(&tuple(&["C, D", "3", "extra"])));
        assert!(!list.contains(&tuple(&["A", "9"])));
        assert!(!list.contains(&tuple(&["A"])));
        assert_eq!(list.rows()[1], tuple(&["B", "2"]));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReferenceSource
            .load(Path::new("/nonexistent/list.csv"))
            .unwrap_err();
        assert!(matches!(err, CheckError::ReferenceList { ref locator, .. } if locator.ends_with("list.csv")));
    }

    struct CountingSource(Arc<AtomicUsize>);

    impl ReferenceSource for CountingSource {
        fn load(&self, _path: &Path) -> Result<ReferenceList> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ReferenceList::from_rows([["A", "1"]]))
        }
    }

    #[test]
    fn test_cache() {
        let reads = Arc::new(AtomicUsize::new(0));

        let mut cached = ReferenceLists::new(Box::new(CountingSource(Arc::clone(&reads))), true);
        cached.get(Path::new("a.csv")).unwrap();
        cached.get(Path::new("a.csv")).unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 1);

        cached.clear();
        cached.get(Path::new("a.csv")).unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 2);

        let mut uncached = ReferenceLists::new(Box::new(CountingSource(Arc::clone(&reads))), false);
        uncached.get(Path::new("a.csv")).unwrap();
        uncached.get(Path::new("a.csv")).unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 4);
    }
}
