//! Deduplicated, ordered word records.
use std::collections::{btree_set, BTreeMap, BTreeSet};
use std::path::Path;

use itertools::Itertools;
use tempfile::NamedTempFile;

use super::WordRecord;
use crate::error::Error;

/// CSV header, in column order.
pub const HEADER: [&str; 3] = ["word_with_tashkeel", "word_without_tashkeel", "source"];

/// Set of unique [WordRecord], iterated in output order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    records: BTreeSet<WordRecord>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning `false` if it was already present.
    pub fn insert(&mut self, record: WordRecord) -> bool {
        self.records.insert(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, WordRecord> {
        self.records.iter()
    }

    /// Number of records attributed to each source.
    pub fn counts_by_source(&self) -> BTreeMap<&str, usize> {
        self.records
            .iter()
            .counts_by(|record| record.source())
            .into_iter()
            .collect()
    }

    /// Write the header then every record to `dst`.
    ///
    /// Rows are written into a temporary file next to `dst`, that replaces `dst` once everything is written.
    /// On error, `dst` is left untouched.
    pub fn write_csv(&self, dst: &Path) -> Result<(), Error> {
        let dir = match dst.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;

        {
            let mut out = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            out.write_record(HEADER)?;
            for record in &self.records {
                out.serialize(record)?;
            }
            out.flush()?;
        }

        tmp.persist(dst)?;
        info!("wrote {} records to {:?}", self.len(), dst);
        Ok(())
    }
}

impl Extend<WordRecord> for WordSet {
    fn extend<T: IntoIterator<Item = WordRecord>>(&mut self, iter: T) {
        self.records.extend(iter)
    }
}

impl FromIterator<WordRecord> for WordSet {
    fn from_iter<T: IntoIterator<Item = WordRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a WordRecord;
    type IntoIter = btree_set::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordSet {
        [
            ("قَلَم", "s2"),
            ("كتاب", "s1"),
            ("قَلَم", "s1"),
            ("كتاب", "s1"),
            ("بيت", "s2"),
        ]
        .into_iter()
        .map(|(word, source)| WordRecord::new(word, source))
        .collect()
    }

    #[test]
    fn dedup_by_triple() {
        let set = sample();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 4);

        let counts = set.counts_by_source();
        assert_eq!(counts.get("s1"), Some(&2));
        assert_eq!(counts.get("s2"), Some(&2));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = WordSet::new();
        assert!(set.insert(WordRecord::new("قلم", "s1")));
        assert!(!set.insert(WordRecord::new("قلم", "s1")));
        assert!(set.insert(WordRecord::new("قلم", "s2")));
    }

    #[test]
    fn iteration_is_sorted() {
        let set = sample();
        let keys: Vec<(&str, &str)> = set
            .iter()
            .map(|r| (r.source(), r.with_tashkeel()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0].0, "s1");
    }

    #[test]
    fn write_empty_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.csv");
        let set = WordSet::new();
        assert!(set.is_empty());
        set.write_csv(&dst).unwrap();

        let content = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(content, "word_with_tashkeel,word_without_tashkeel,source\n");
    }

    #[test]
    fn write_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.csv");
        std::fs::write(&dst, "stale").unwrap();

        sample().write_csv(&dst).unwrap();
        let content = std::fs::read_to_string(&dst).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines[1], "قَلَم,قلم,s1");

        // no temporary file left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("nope").join("out.csv");
        assert!(sample().write_csv(&dst).is_err());
    }
}
