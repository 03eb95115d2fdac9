// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Propex is a codec for Java `.properties` files and their XML counterpart.
//!
//! The text format is read with the historical ISO-8859-1 (Latin-1) 8-bit
//! convention; characters outside printable ASCII are written back as
//! `\uXXXX` escapes. The XML format is the `properties.dtd` document shape
//! written by `java.util.Properties`.
//!
//! The central type is [`Properties`]:
//!
//! ```rust
//! use propex::Properties;
//!
//! fn example() -> propex::Result<()> {
//!     let mut props = Properties::new();
//!     props.load_from_str("greeting=hello world\n")?;
//!     assert_eq!(props.get("greeting"), Some("hello world"));
//!     props.set("count", "3");
//!     let text = props.to_text();
//!     assert_eq!(text, "count=3\ngreeting=hello world\n");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod props;

pub use crate::error::{Error, Result};
pub use crate::props::store::Properties;
