// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! XML representation of a property store.
//!
//! The document shape is the one written by `java.util.Properties`: a
//! DOCTYPE naming `properties` with the `properties.dtd` system identifier,
//! a `<properties>` root and one `<entry key="K">V</entry>` per property.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};
use crate::props::store::Properties;

const DOCTYPE: &str = "properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\"";

/// Return the mandatory `key` attribute of an `entry` element.
fn entry_key(element: &BytesStart) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"key" {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(Error::MalformedXml)
}

/// Parse an XML properties document, inserting entries into the store as
/// they are read. A malformed element aborts the scan; entries seen before
/// it stay committed.
pub(crate) fn from_xml(content: &str, store: &mut Properties) -> Result<()> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    let mut current_key: Option<String> = None;
    let mut text = String::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"entry" {
                    current_key = Some(entry_key(&e)?);
                    text.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"entry" {
                    store.set(entry_key(&e)?, "");
                }
            }
            Ok(Event::Text(e)) => {
                if current_key.is_some() {
                    text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"entry"
                    && let Some(key) = current_key.take()
                {
                    store.set(key, std::mem::take(&mut text));
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => return Err(Error::MalformedXml),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Serialize the store to an XML properties document string.
pub(crate) fn to_xml(store: &Properties) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer.write_event(Event::Start(BytesStart::new("properties")))?;

    for (key, value) in store.iter() {
        let mut entry = BytesStart::new("entry");
        entry.push_attribute(("key", key));
        if value.is_empty() {
            writer.write_event(Event::Empty(entry))?;
        } else {
            writer.write_event(Event::Start(entry))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new("entry")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("properties")))?;

    let mut xml = String::from_utf8(output).map_err(|_| Error::MalformedXml)?;
    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().copied().collect()
    }

    #[test]
    fn to_xml_document_shape() {
        let props = store(&[("name", "propex"), ("empty", "")]);
        let xml = to_xml(&props).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<!DOCTYPE properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\">"
        ));
        assert!(xml.contains("<properties>"));
        assert!(xml.contains("<entry key=\"name\">propex</entry>"));
        assert!(xml.contains("<entry key=\"empty\"/>"));
        assert!(xml.ends_with("</properties>\n"));
    }

    #[test]
    fn from_xml_basic() {
        let mut props = Properties::new();
        from_xml(
            "<!DOCTYPE properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\">\n\
             <properties>\n\
                 <entry key=\"a\">1</entry>\n\
                 <entry key=\"b\"/>\n\
             </properties>\n",
            &mut props,
        )
        .unwrap();
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some(""));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn xml_roundtrip() {
        let props = store(&[
            ("plain", "value"),
            ("markup", "a < b & c"),
            ("quoted key \"x\"", "it's fine"),
            ("accent", "café"),
        ]);
        let xml = to_xml(&props).unwrap();
        let mut reloaded = Properties::new();
        from_xml(&xml, &mut reloaded).unwrap();
        assert_eq!(reloaded, props);
    }

    #[test]
    fn entry_without_key_attribute_is_malformed() {
        let mut props = Properties::new();
        let err = from_xml(
            "<properties><entry>value</entry></properties>",
            &mut props,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedXml));
    }

    #[test]
    fn invalid_syntax_is_malformed() {
        let mut props = Properties::new();
        assert!(matches!(
            from_xml("<properties><entry key=\"a\">1</properties>", &mut props),
            Err(Error::MalformedXml)
        ));
    }

    #[test]
    fn partial_commit_before_bad_element() {
        let mut props = Properties::new();
        let result = from_xml(
            "<properties>\
                 <entry key=\"ok\">1</entry>\
                 <entry>no key</entry>\
                 <entry key=\"late\">2</entry>\
             </properties>",
            &mut props,
        );
        assert!(result.is_err());
        assert_eq!(props.get("ok"), Some("1"));
        assert_eq!(props.get("late"), None);
    }

    #[test]
    fn duplicate_entry_last_wins() {
        let mut props = Properties::new();
        from_xml(
            "<properties>\
                 <entry key=\"k\">first</entry>\
                 <entry key=\"k\">second</entry>\
             </properties>",
            &mut props,
        )
        .unwrap();
        assert_eq!(props.get("k"), Some("second"));
    }
}
