//! Word record.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::extract::strip_diacritics;

/// A harvested word.
///
/// The bare form is always derived from the vocalized one, see [WordRecord::new].
///
/// Records are ordered by source name, then by vocalized form.
/// The field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "word_with_tashkeel")]
    with_tashkeel: String,
    #[serde(rename = "word_without_tashkeel")]
    without_tashkeel: String,
    source: String,
}

impl WordRecord {
    pub fn new(word: &str, source: &str) -> Self {
        Self {
            with_tashkeel: word.to_string(),
            without_tashkeel: strip_diacritics(word),
            source: source.to_string(),
        }
    }

    /// Get a reference to the word with its diacritics.
    pub fn with_tashkeel(&self) -> &str {
        &self.with_tashkeel
    }

    /// Get a reference to the word without diacritics.
    pub fn without_tashkeel(&self) -> &str {
        &self.without_tashkeel
    }

    /// Get a reference to the record's source name.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Ord for WordRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.with_tashkeel.cmp(&other.with_tashkeel))
            .then_with(|| self.without_tashkeel.cmp(&other.without_tashkeel))
    }
}

impl PartialOrd for WordRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
