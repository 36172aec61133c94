/*! Zip scanning

Fetched archives are usually capped prefixes, and therefore not readable zip containers (the central directory lives at the end).
[scan_archive] first tries to open the buffer as a zip, and falls back to a raw text scan of the bytes when it can't.

Stored (uncompressed) members of a truncated prefix are still visible in clear in the raw bytes, which is what the fallback relies on.
!*/
use std::io::{Cursor, Read, Seek};

use zip::ZipArchive;

use super::arabic::arabic_runs;
use super::decoder::{decode_runs, TextEncoding};
use crate::error::Error;

/// Member extensions that are scanned.
const TEXT_EXTENSIONS: [&str; 3] = [".txt", ".csv", ".tsv"];

/// Outcome of a [scan_archive] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveScan {
    /// Runs found in the text members of a readable archive.
    Members(Vec<String>),
    /// The buffer is not a readable archive and has been scanned as raw text.
    RawFallback { runs: Vec<String>, reason: String },
}

impl ArchiveScan {
    pub fn runs(&self) -> &[String] {
        match self {
            ArchiveScan::Members(runs) => runs,
            ArchiveScan::RawFallback { runs, .. } => runs,
        }
    }

    pub fn into_runs(self) -> Vec<String> {
        match self {
            ArchiveScan::Members(runs) => runs,
            ArchiveScan::RawFallback { runs, .. } => runs,
        }
    }
}

fn is_text_member(name: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Scan `bytes` for Arabic runs, keeping at most `limit` of them.
///
/// Text members are picked from the central directory, without touching their local headers, and visited in name order.
/// They are read lazily: once `limit` runs are collected, remaining members are not decompressed.
///
/// A text member that can't be opened aborts the scan and returns an error.
/// A text member that can be opened but fails while being read is skipped.
pub fn scan_archive(bytes: &[u8], limit: Option<usize>) -> Result<ArchiveScan, Error> {
    let limit = limit.unwrap_or(usize::MAX);

    let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive,
        Err(e) => {
            debug!("not a readable zip ({}), scanning {} raw bytes", e, bytes.len());
            let runs = decode_runs(bytes).into_iter().take(limit).collect();
            return Ok(ArchiveScan::RawFallback {
                runs,
                reason: e.to_string(),
            });
        }
    };

    // the name index is unordered
    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| is_text_member(name))
        .map(String::from)
        .collect();
    names.sort_unstable();
    debug!(
        "opened zip with {} entries, {} text members",
        archive.len(),
        names.len()
    );

    let runs = names
        .iter()
        .filter_map(|name| read_text_member(&mut archive, name).transpose())
        .flat_map(|member| match member {
            Ok(text) => arabic_runs(&text)
                .map(|run| Ok(run.to_string()))
                .collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        })
        .take(limit)
        .collect::<Result<Vec<String>, Error>>()?;

    Ok(ArchiveScan::Members(runs))
}

/// Read and decode member `name`, or `None` if its content is unreadable.
fn read_text_member<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, Error> {
    let mut member = archive.by_name(name)?;
    let mut content = Vec::new();
    if let Err(e) = member.read_to_end(&mut content) {
        warn!("skipping unreadable member {}: {}", name, e);
        return Ok(None);
    }

    debug!("read member {} ({} bytes)", name, content.len());
    Ok(Some(TextEncoding::Utf8.decode(&content)))
}
