/*! Arabic word extraction

Turns fetched bytes into Arabic runs:
- [decoder] guesses a text encoding and extracts runs from raw bytes,
- [arabic] holds the run pattern and the diacritic stripper,
- [archive] opens (possibly truncated) zip containers and scans their text members.
!*/
pub mod arabic;
pub mod archive;
pub mod decoder;

pub use arabic::{arabic_runs, is_diacritic, strip_diacritics};
pub use archive::{scan_archive, ArchiveScan};
pub use decoder::{decode_runs, TextEncoding};
