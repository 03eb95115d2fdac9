// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of a logical line into a decoded key/value pair.

use crate::error::Result;
use crate::props::escape::EscapePropExt;

/// Byte offset of the first `=` or `:` not preceded by an unescaped
/// backslash, if any. Escape pairs are skipped atomically.
fn find_separator(line: &str) -> Option<usize> {
    let mut it = line.char_indices();
    while let Some((idx, ch)) = it.next() {
        match ch {
            '\\' => {
                it.next();
            }
            '=' | ':' => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Split a logical line into its raw (still escaped) key and value parts.
///
/// Blanks around the separator are consumed; the split happens at most once,
/// so the value may itself contain further separators. Returns `None` for a
/// blank line or a line with nothing before the separator.
#[must_use]
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let (key, value) = match find_separator(trimmed) {
        Some(idx) => (
            trimmed[..idx].trim_end_matches([' ', '\t']),
            trimmed[idx + 1..].trim_start_matches([' ', '\t']),
        ),
        None => (trimmed.trim_end_matches([' ', '\t']), ""),
    };
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse one logical line into a decoded (key, value) pair, or `None` when
/// the line holds no entry.
///
/// # Errors
/// Fails on a malformed `\uXXXX` escape in either part.
pub fn parse_line(line: &str) -> Result<Option<(String, String)>> {
    let Some((key, value)) = split_entry(line) else {
        return Ok(None);
    };
    let key = key.unescape_prop(true)?;
    let value = value.unescape_prop(false)?;
    Ok(Some((key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Option<(String, String)> {
        parse_line(line).unwrap()
    }

    #[test]
    fn split_at_first_separator_only() {
        assert_eq!(parsed("a:b=c"), Some(("a".to_string(), "b=c".to_string())));
        assert_eq!(parsed("a=b:c"), Some(("a".to_string(), "b:c".to_string())));
    }

    #[test]
    fn escaped_separator_belongs_to_the_key() {
        assert_eq!(parsed("a\\:b=c"), Some(("a:b".to_string(), "c".to_string())));
        assert_eq!(parsed("a\\=b:c"), Some(("a=b".to_string(), "c".to_string())));
    }

    #[test]
    fn blanks_around_separator_are_consumed() {
        assert_eq!(
            parsed("  key \t= \tvalue"),
            Some(("key".to_string(), "value".to_string()))
        );
        assert_eq!(parsed("key : value"), Some(("key".to_string(), "value".to_string())));
    }

    #[test]
    fn line_without_separator_is_a_key_with_empty_value() {
        assert_eq!(parsed("standalone"), Some(("standalone".to_string(), String::new())));
    }

    #[test]
    fn blank_or_empty_key_lines_are_skipped() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("   \t"), None);
        assert_eq!(parsed("=value"), None);
        assert_eq!(parsed("  : value"), None);
    }

    #[test]
    fn malformed_escape_propagates() {
        assert!(parse_line("key=\\uXYZW").is_err());
        assert!(parse_line("bad\\uQQQQ=v").is_err());
    }

    #[test]
    fn interior_comment_marker_is_an_entry() {
        assert_eq!(parsed("#foo=bar"), Some(("#foo".to_string(), "bar".to_string())));
    }
}
