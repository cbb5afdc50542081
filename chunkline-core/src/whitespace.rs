//! Byte classification shared by the boundary finder, sanitizer and driver
//!
//! Classification is ASCII-only and matches the C locale: space, tab, line
//! feed, vertical tab, form feed and carriage return. Every other byte,
//! including NUL and any byte of a multi-byte UTF-8 sequence, is part of a
//! word.

/// Vertical tab
const VT: u8 = 0x0B;
/// Form feed
const FF: u8 = 0x0C;

/// Check if a byte separates words
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | VT | FF | b'\r')
}

/// Check if a byte is flattened to a single space inside a chunk
///
/// Vertical tab and form feed are whitespace for trimming but are left in
/// place when they occur between words.
#[inline]
pub fn is_line_break_or_tab(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b'\t')
}

/// Index of the first non-space byte at or after `from`, or `text.len()`
pub fn skip_spaces(text: &[u8], from: usize) -> usize {
    let from = from.min(text.len());
    text[from..]
        .iter()
        .position(|&b| !is_space(b))
        .map_or(text.len(), |i| from + i)
}

/// Strip trailing space bytes
pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Strip leading space bytes
pub fn trim_start(bytes: &[u8]) -> &[u8] {
    &bytes[skip_spaces(bytes, 0)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_locale_spaces() {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(b), "byte {b:#04x} should be a space");
        }
        for b in [b'a', b'0', b'"', b'\\', 0x00, 0x85, 0xA0, 0xE3] {
            assert!(!is_space(b), "byte {b:#04x} should not be a space");
        }
    }

    #[test]
    fn test_flattened_bytes_exclude_vt_and_ff() {
        assert!(is_line_break_or_tab(b'\n'));
        assert!(is_line_break_or_tab(b'\r'));
        assert!(is_line_break_or_tab(b'\t'));
        assert!(!is_line_break_or_tab(b' '));
        assert!(!is_line_break_or_tab(0x0B));
        assert!(!is_line_break_or_tab(0x0C));
    }

    #[test]
    fn test_skip_spaces() {
        let text = b"ab \t\n cd";
        assert_eq!(skip_spaces(text, 0), 0);
        assert_eq!(skip_spaces(text, 2), 6);
        assert_eq!(skip_spaces(b"   ", 0), 3);
        assert_eq!(skip_spaces(b"abc", 10), 3);
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim_end(b"  word \r\n"), b"  word");
        assert_eq!(trim_start(b" \t word  "), b"word  ");
        assert_eq!(trim_end(b" \n "), b"");
        assert_eq!(trim_start(b""), b"");
    }
}
