// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types for the propex crate.

use thiserror::Error;

/// The error type for all load, save and lookup operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `\uXXXX` escape sequence with a non-hexadecimal digit, a truncated
    /// sequence, or an unpaired UTF-16 surrogate value.
    #[error("malformed unicode escape: \\u{0}")]
    MalformedUnicodeEscape(String),

    /// Invalid XML syntax, or an `entry` element without a `key` attribute.
    #[error("malformed XML format")]
    MalformedXml,

    /// Lookup or removal of a key that is not in the store.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl From<quick_xml::Error> for Error {
    fn from(_: quick_xml::Error) -> Self {
        Error::MalformedXml
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(_: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedXml
    }
}

/// A `Result` alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
