/*! Harvest pipeline

Sources are processed one after the other, in the configured order:

1. The first [Config::byte_cap] bytes of the source are fetched. A failed fetch yields an empty buffer.
1. Text and generic sources go through the encoding guesser, archives through the zip scanner
   (with its raw text fallback).
1. In bounded mode, only the first [Config::words_per_source] words are kept.
1. Words become [WordRecord]s, accumulated in a single [WordSet].

Once every source has been processed, the set is written to [Config::dst].

Failures never stop the run: each source reports them as [Diagnostic]s in its [Harvested] result.
!*/
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::download::Fetch;
use crate::error::Error;
use crate::extract::{decode_runs, scan_archive, ArchiveScan};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{Source, SourceKind};
use crate::writing::{WordRecord, WordSet};

/// Something that went wrong (or unusually) while processing a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Transport failure, the source has been treated as empty.
    Fetch { url: String, reason: String },
    /// The archive could not be opened and has been scanned as raw text.
    NotAnArchive { reason: String },
    /// The archive could be opened but not scanned. No word is kept.
    Archive { reason: String },
    /// Bytes were fetched but contain no Arabic run.
    NoWords,
}

impl Diagnostic {
    /// `true` if the diagnostic means that words may have been lost.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Diagnostic::NotAnArchive { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Fetch { url, reason } => write!(f, "could not fetch {}: {}", url, reason),
            Diagnostic::NotAnArchive { reason } => {
                write!(f, "incomplete or invalid zip ({}), scanned as raw text", reason)
            }
            Diagnostic::Archive { reason } => write!(f, "could not scan archive: {}", reason),
            Diagnostic::NoWords => f.write_str("no arabic word found"),
        }
    }
}

/// Result of the processing of a single source.
#[derive(Debug, Clone)]
pub struct Harvested {
    source: String,
    records: Vec<WordRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl Harvested {
    /// Get a reference to the source name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Records in extraction order. May contain duplicates.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// What a [Harvest] run did.
#[derive(Debug)]
pub struct Summary {
    total: usize,
    per_source: Vec<(String, usize)>,
    diagnostics: Vec<(String, Diagnostic)>,
    dst: PathBuf,
}

impl Summary {
    fn new(words: &WordSet, harvested: Vec<Harvested>, dst: &Path) -> Self {
        let counts = words.counts_by_source();
        let per_source = harvested
            .iter()
            .map(|h| {
                let count = counts.get(h.source()).copied().unwrap_or(0);
                (h.source.clone(), count)
            })
            .collect();
        let diagnostics = harvested
            .into_iter()
            .flat_map(|h| {
                let source = h.source;
                h.diagnostics
                    .into_iter()
                    .map(move |d| (source.clone(), d))
            })
            .collect();

        Self {
            total: words.len(),
            per_source,
            diagnostics,
            dst: dst.to_path_buf(),
        }
    }

    /// Number of unique records written.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Unique records per source, in source order.
    pub fn per_source(&self) -> &[(String, usize)] {
        &self.per_source
    }

    pub fn diagnostics(&self) -> &[(String, Diagnostic)] {
        &self.diagnostics
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }
}

pub struct Harvest<F: Fetch> {
    config: Config,
    fetcher: F,
}

impl<F: Fetch> Harvest<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        debug!("harvest config: {:#?}", config);
        Self { config, fetcher }
    }

    /// Fetch a source and extract its words.
    ///
    /// This never fails: errors are logged and reported in [Harvested::diagnostics].
    pub fn process_source(&self, source: &Source) -> Harvested {
        info!("[{}] {} source -> {}", source.name(), source.kind(), source.url());
        let mut diagnostics = Vec::new();

        let bytes = match self
            .fetcher
            .fetch_head(source.url(), self.config.byte_cap())
        {
            Ok(bytes) => bytes,
            Err(e) => {
                diagnostics.push(Diagnostic::Fetch {
                    url: source.url().to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        let limit = self.config.words_per_source();
        let words = match source.kind() {
            SourceKind::Text | SourceKind::Generic => decode_runs(&bytes)
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .collect(),
            SourceKind::Archive => match scan_archive(&bytes, limit) {
                Ok(ArchiveScan::Members(runs)) => runs,
                Ok(ArchiveScan::RawFallback { runs, reason }) => {
                    diagnostics.push(Diagnostic::NotAnArchive { reason });
                    runs
                }
                Err(e) => {
                    diagnostics.push(Diagnostic::Archive {
                        reason: e.to_string(),
                    });
                    Vec::new()
                }
            },
        };

        if words.is_empty() && !bytes.is_empty() {
            diagnostics.push(Diagnostic::NoWords);
        }

        for diagnostic in &diagnostics {
            if diagnostic.is_failure() {
                warn!("[{}] {}", source.name(), diagnostic);
            } else {
                info!("[{}] {}", source.name(), diagnostic);
            }
        }

        let records: Vec<WordRecord> = words
            .iter()
            .map(|word| WordRecord::new(word, source.name()))
            .collect();
        info!("[{}] {} words extracted", source.name(), records.len());

        Harvested {
            source: source.name().to_string(),
            records,
            diagnostics,
        }
    }

    /// Process every source in order, accumulating their records.
    pub fn collect(&self) -> (WordSet, Vec<Harvested>) {
        let mut words = WordSet::new();
        let mut harvested = Vec::with_capacity(self.config.sources().len());

        for source in self.config.sources() {
            let result = self.process_source(source);
            words.extend(result.records().iter().cloned());
            harvested.push(result);
        }

        (words, harvested)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<F: Fetch> Pipeline<Summary> for Harvest<F> {
    /// Create the working directory, harvest every source and write the result.
    ///
    /// Only the directory creation and the final write may fail.
    fn run(&self) -> Result<Summary, Error> {
        std::fs::create_dir_all(self.config.data_dir())?;

        let (words, harvested) = self.collect();
        info!(
            "writing {} unique records to {:?}",
            words.len(),
            self.config.dst()
        );
        words.write_csv(self.config.dst())?;

        Ok(Summary::new(&words, harvested, self.config.dst()))
    }
}
