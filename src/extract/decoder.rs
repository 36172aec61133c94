/*! Encoding guessing

The encoding of a source is not known in advance, so bytes are decoded with each [TextEncoding] of
[TextEncoding::FALLBACK_ORDER] in turn, and the first decoding that yields at least one Arabic run wins.

Malformed sequences are dropped rather than replaced, so that a broken byte in the middle of a word does not split it.
!*/
use encoding_rs::{DecoderResult, Encoding, UTF_8, WINDOWS_1256};

use super::arabic::arabic_runs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Arabic Windows code page.
    Windows1256,
    /// ISO-8859-1. Every byte is valid.
    Latin1,
}

impl TextEncoding {
    pub const FALLBACK_ORDER: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Windows1256,
        TextEncoding::Latin1,
    ];

    /// Decode `bytes`, silently dropping malformed sequences.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => decode_dropping_malformed(UTF_8, bytes),
            TextEncoding::Windows1256 => decode_dropping_malformed(WINDOWS_1256, bytes),
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

fn decode_dropping_malformed(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len()),
    );

    let mut src = bytes;
    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
        src = &src[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => {
                let additional = decoder
                    .max_utf8_buffer_length_without_replacement(src.len())
                    .unwrap_or(src.len())
                    .max(4);
                out.reserve(additional);
            }
            // the offending bytes have been consumed, resume after them
            DecoderResult::Malformed(_, _) => continue,
        }
    }
    out
}

/// Arabic runs of the first encoding of [TextEncoding::FALLBACK_ORDER] that yields any.
///
/// Returns an empty [Vec] when `bytes` is empty or when no encoding produces a match.
pub fn decode_runs(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }

    for encoding in TextEncoding::FALLBACK_ORDER {
        let text = encoding.decode(bytes);
        let runs: Vec<String> = arabic_runs(&text).map(String::from).collect();
        if !runs.is_empty() {
            debug!("decoded {} bytes as {:?}", bytes.len(), encoding);
            return runs;
        }
    }

    debug!("no arabic run found in {} bytes", bytes.len());
    Vec::new()
}
