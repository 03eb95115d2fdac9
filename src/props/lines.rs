// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembly of logical lines from a decoded properties buffer.
//!
//! A `#` or `!` comment is recognized at the very start of the buffer only;
//! a comment line anywhere else is parsed as an ordinary entry. This matches
//! the historical behavior of the format's reference loader, not the
//! conventional every-line comment rule.

use std::borrow::Cow;

use memchr::memchr3;

/// Drop a single leading `#`/`!` comment line from the start of the buffer.
#[must_use]
pub fn strip_leading_comment(text: &str) -> &str {
    if text.starts_with(['#', '!']) {
        match memchr3(b'\n', b'\r', b'\x0C', text.as_bytes()) {
            Some(pos) => &text[pos..],
            None => "",
        }
    } else {
        text
    }
}

/// Join continuation lines: blanks before an unescaped trailing backslash,
/// the backslash, the line terminator run and the next line's leading blanks
/// are deleted as one unit.
///
/// Escape pairs are consumed atomically, so `\\` at end of line does not
/// continue the line.
#[must_use]
pub fn join_continuations(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut it = text.chars().peekable();
    while let Some(ch) = it.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match it.peek().copied() {
            Some('\r' | '\n' | '\x0C') => {
                while out.ends_with([' ', '\t']) {
                    out.pop();
                }
                while matches!(it.peek(), Some('\r' | '\n' | '\x0C')) {
                    it.next();
                }
                while matches!(it.peek(), Some(' ' | '\t')) {
                    it.next();
                }
            }
            Some(c) => {
                out.push('\\');
                out.push(c);
                it.next();
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Iterator over logical lines, split on runs of line terminators
/// (CR, LF, form feed, in any combination).
pub struct LogicalLines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LogicalLines<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && matches!(bytes[self.pos], b'\n' | b'\r' | b'\x0C') {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        let end = memchr3(b'\n', b'\r', b'\x0C', &bytes[start..])
            .map_or(bytes.len(), |found| start + found);
        self.pos = end;
        Some(&self.text[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        LogicalLines::new(text).collect()
    }

    #[test]
    fn strip_comment_at_start() {
        assert_eq!(strip_leading_comment("# header\na=b\n"), "\na=b\n");
        assert_eq!(strip_leading_comment("! header\na=b\n"), "\na=b\n");
        assert_eq!(strip_leading_comment("# only a comment"), "");
    }

    #[test]
    fn strip_comment_only_at_start() {
        // An interior comment line is not stripped; it will later parse as
        // an entry with key "#interior".
        let text = "a=b\n#interior\nc=d\n";
        assert_eq!(strip_leading_comment(text), text);
    }

    #[test]
    fn join_simple_continuation() {
        assert_eq!(join_continuations("key=val\\\nue"), "key=value");
    }

    #[test]
    fn join_trims_surrounding_blanks() {
        assert_eq!(join_continuations("key=val  \\\n   ue"), "key=value");
        assert_eq!(join_continuations("key=val\t\\\r\n\tue"), "key=value");
    }

    #[test]
    fn join_eats_terminator_runs() {
        assert_eq!(join_continuations("a=b\\\r\n\r\nc"), "a=bc");
    }

    #[test]
    fn escaped_backslash_is_not_a_continuation() {
        assert_eq!(join_continuations("a=b\\\\\nc=d"), "a=b\\\\\nc=d");
    }

    #[test]
    fn no_continuation_borrows() {
        assert!(matches!(join_continuations("a=b\nc=d"), Cow::Borrowed(_)));
    }

    #[test]
    fn split_on_terminator_runs() {
        assert_eq!(lines("a=1\nb=2\r\nc=3\x0Cd=4"), vec!["a=1", "b=2", "c=3", "d=4"]);
        assert_eq!(lines("\n\na=1\n\n\nb=2\n\n"), vec!["a=1", "b=2"]);
        assert_eq!(lines(""), Vec::<&str>::new());
    }
}
