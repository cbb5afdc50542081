//! Chunk sanitizer
//!
//! Turns a raw candidate slice into one output line: trailing and leading
//! whitespace trimmed, embedded line feeds, carriage returns and tabs
//! flattened to spaces, and `"` / `\` escaped with a leading backslash.
//! Every step is total; bytes that are not valid UTF-8 pass through untouched.

use crate::whitespace::{is_line_break_or_tab, trim_end, trim_start};

/// Exact length of `bytes` once escaped
///
/// Never more than `2 * bytes.len()`.
pub fn escaped_len(bytes: &[u8]) -> usize {
    bytes.len() + bytes.iter().filter(|&&b| needs_escape(b)).count()
}

#[inline]
fn needs_escape(byte: u8) -> bool {
    byte == b'"' || byte == b'\\'
}

/// Sanitize a candidate chunk
///
/// Returns `None` when nothing but whitespace remains, which tells the
/// caller to skip the chunk.
pub fn sanitize(candidate: &[u8]) -> Option<Vec<u8>> {
    // Flattening only ever produces spaces, so trimming both ends up front
    // gives the same result as flattening first.
    let trimmed = trim_start(trim_end(candidate));
    if trimmed.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(escaped_len(trimmed));
    for &byte in trimmed {
        if is_line_break_or_tab(byte) {
            out.push(b' ');
        } else if needs_escape(byte) {
            out.push(b'\\');
            out.push(byte);
        } else {
            out.push(byte);
        }
    }
    Some(out)
}

/// Reverse the escaping done by [`sanitize`]
///
/// A backslash not followed by `"` or `\` is kept as is.
pub fn unescape(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut iter = line.iter().copied().peekable();
    while let Some(byte) = iter.next() {
        if byte == b'\\' {
            if let Some(&next) = iter.peek() {
                if needs_escape(next) {
                    out.push(next);
                    iter.next();
                    continue;
                }
            }
        }
        out.push(byte);
    }
    out
}
