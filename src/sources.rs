/*! Word sources.

A [Source] is a named remote resource, along with a [SourceKind] hint that selects how its bytes are processed.
The built-in list is given by [default_sources].
!*/
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How the fetched bytes of a source are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Plain text, possibly in a legacy encoding.
    Text,
    /// Zip container, usually truncated by the fetch cap.
    Archive,
    /// Unknown content, handled like text.
    Generic,
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" | "text" => Ok(SourceKind::Text),
            "zip" | "archive" => Ok(SourceKind::Archive),
            "raw" | "generic" => Ok(SourceKind::Generic),
            other => Err(Error::UnknownSourceKind(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = match self {
            SourceKind::Text => "txt",
            SourceKind::Archive => "zip",
            SourceKind::Generic => "raw",
        };
        f.write_str(hint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    url: String,
    kind: SourceKind,
}

impl Source {
    pub fn new(name: &str, url: &str, kind: SourceKind) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind,
        }
    }

    /// Get a reference to the source's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the source's url.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }
}

const DEFAULT_SOURCES: [(&str, &str, &str); 6] = [
    (
        "quranic",
        "https://corpus.quran.com/download/wordbyword.txt",
        "txt",
    ),
    (
        "arabic_wordlist_cjki",
        "https://raw.githubusercontent.com/linuxscout/arabic-wordlist/master/arabic.txt",
        "txt",
    ),
    (
        "qabas",
        "https://github.com/arabic-tools/qabas/archive/refs/heads/main.zip",
        "zip",
    ),
    (
        "arablex",
        "https://www.cjk.org/data/arabic/nlp/arablex-arabic-full-form-lexicon/arablex.zip",
        "zip",
    ),
    (
        "camel",
        "https://github.com/CAMeL-Lab/Camel_Arabic_Frequency_Lists/archive/refs/heads/master.zip",
        "zip",
    ),
    (
        "kalimat",
        "https://sourceforge.net/projects/kalimat/files/kalimat/kalimat.zip/download",
        "zip",
    ),
];

/// Built-in source list, in processing order.
pub fn default_sources() -> Vec<Source> {
    DEFAULT_SOURCES
        .iter()
        .filter_map(|(name, url, hint)| match hint.parse() {
            Ok(kind) => Some(Source::new(name, url, kind)),
            Err(e) => {
                error!("skipping built-in source {}: {}", name, e);
                None
            }
        })
        .collect()
}
