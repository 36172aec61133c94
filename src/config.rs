//! Run configuration.
use std::path::{Path, PathBuf};

use crate::sources::{default_sources, Source};

/// Default fetch size per source (50 KiB).
pub const DEFAULT_BYTE_CAP: usize = 50 * 1024;

/// Default number of words kept per source in bounded mode.
pub const DEFAULT_WORD_LIMIT: usize = 20;

pub const DEFAULT_DST: &str = "arabic_words.csv";
pub const DEFAULT_DATA_DIR: &str = "datasets";

/// Everything a [crate::pipelines::Harvest] needs.
///
/// `byte_cap` bounds every fetch, whatever the mode.
/// `word_limit` only applies when `bounded` is set.
#[derive(Debug, Clone)]
pub struct Config {
    sources: Vec<Source>,
    bounded: bool,
    byte_cap: usize,
    word_limit: usize,
    dst: PathBuf,
    data_dir: PathBuf,
}

impl Config {
    /// Default configuration, with output paths set relative to `base`.
    pub fn with_base_dir(base: &Path) -> Self {
        Self {
            sources: default_sources(),
            bounded: false,
            byte_cap: DEFAULT_BYTE_CAP,
            word_limit: DEFAULT_WORD_LIMIT,
            dst: base.join(DEFAULT_DST),
            data_dir: base.join(DEFAULT_DATA_DIR),
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_bounded(mut self, bounded: bool) -> Self {
        self.bounded = bounded;
        self
    }

    pub fn with_byte_cap(mut self, byte_cap: usize) -> Self {
        self.byte_cap = byte_cap;
        self
    }

    pub fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }

    pub fn with_dst(mut self, dst: PathBuf) -> Self {
        self.dst = dst;
        self
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Get a reference to the config's sources.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn bounded(&self) -> bool {
        self.bounded
    }

    pub fn byte_cap(&self) -> usize {
        self.byte_cap
    }

    /// Maximum number of words taken from a single source, if any.
    pub fn words_per_source(&self) -> Option<usize> {
        self.bounded.then_some(self.word_limit)
    }

    /// Get a reference to the config's destination file.
    pub fn dst(&self) -> &Path {
        &self.dst
    }

    /// Get a reference to the config's working directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
