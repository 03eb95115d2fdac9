// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The property store: the key/value map behind a properties file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::props::escape::EscapePropExt;
use crate::props::{lines, parser, xml};

/// An ordered map of string properties, loadable from and savable to the
/// properties text format and its XML counterpart.
///
/// Loaders insert entries as they parse: a format error aborts the load and
/// leaves the entries committed so far in the store. Callers wanting
/// all-or-nothing semantics can load into a fresh store and swap on success.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Return the value for a key, falling back to `default`.
    ///
    /// An empty `default` counts as "no default given": the lookup of a
    /// missing key then fails instead of returning the empty string. This
    /// quirk is kept for compatibility with the historical API; use
    /// [`Properties::get`] for the plain optional lookup.
    ///
    /// # Errors
    /// `KeyNotFound` when the key is absent and `default` is empty.
    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str> {
        match self.entries.get(key) {
            Some(value) => Ok(value),
            None if !default.is_empty() => Ok(default),
            None => Err(Error::KeyNotFound(key.to_string())),
        }
    }

    /// Insert or overwrite a property.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a property and return its value.
    ///
    /// # Errors
    /// `KeyNotFound` when the key is absent.
    pub fn remove(&mut self, key: &str) -> Result<String> {
        self.entries
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Return `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the store holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Iterator over the (key, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Consume the store, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }

    /// Dump the entries as a JSON object string.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_default()
    }

    /// Parse properties text and insert every entry into the store.
    ///
    /// # Errors
    /// Fails on a malformed `\uXXXX` escape; entries parsed before the
    /// offending line stay in the store.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let text = lines::strip_leading_comment(text);
        let joined = lines::join_continuations(text);
        for line in lines::LogicalLines::new(&joined) {
            if let Some((key, value)) = parser::parse_line(line)? {
                self.entries.insert(key, value);
            }
        }
        Ok(())
    }

    /// Serialize the store to properties text, one `key=value` line per
    /// entry in key order.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(&key.escape_prop(true));
            out.push('=');
            out.push_str(&value.escape_prop(false));
            out.push('\n');
        }
        out
    }

    /// Load a properties text file, reading its bytes as ISO-8859-1.
    ///
    /// # Errors
    /// I/O errors, or a malformed `\uXXXX` escape (partial commit).
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        let _ = file.read_to_end(&mut buf)?;
        let text = encoding_rs::mem::decode_latin1(&buf);
        self.load_from_str(&text)
    }

    /// Save the store as a properties text file.
    ///
    /// The escaped text is pure printable ASCII, so the ISO-8859-1 encoding
    /// of the write never loses data.
    ///
    /// # Errors
    /// I/O errors.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_text();
        std::fs::write(path, encoding_rs::mem::encode_latin1_lossy(&text))?;
        Ok(())
    }

    /// Parse an XML properties document and insert every entry.
    ///
    /// # Errors
    /// `MalformedXml` on invalid syntax or an `entry` element without a
    /// `key` attribute; entries before the offending element stay committed.
    pub fn load_from_xml_str(&mut self, content: &str) -> Result<()> {
        xml::from_xml(content, self)
    }

    /// Serialize the store as an XML properties document.
    ///
    /// # Errors
    /// `MalformedXml` if the document cannot be built.
    pub fn to_xml_string(&self) -> Result<String> {
        xml::to_xml(self)
    }

    /// Load an XML properties file (UTF-8).
    ///
    /// # Errors
    /// I/O errors, or `MalformedXml` (partial commit).
    pub fn load_xml<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.load_from_xml_str(&content)
    }

    /// Save the store as an XML properties file (UTF-8).
    ///
    /// # Errors
    /// I/O errors, or `MalformedXml` if the document cannot be built.
    pub fn save_xml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_xml_string()?)?;
        Ok(())
    }
}

impl std::fmt::Display for Properties {
    /// Format the store as its JSON dump.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
