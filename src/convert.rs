// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between the text and XML property formats.

use std::path::Path;

use colored::Colorize;

use propex::{Properties, Result};

use crate::args::ConvertArgs;

/// Return `true` if the path names an XML file.
pub fn is_xml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

/// Load a properties file in the representation matching its extension.
pub fn load_any(path: &Path) -> Result<Properties> {
    let mut props = Properties::new();
    if is_xml(path) {
        props.load_xml(path)?;
    } else {
        props.load(path)?;
    }
    Ok(props)
}

/// Convert a single file; the destination extension selects the output
/// representation.
fn convert_file(source: &Path, dest: &Path) -> Result<()> {
    let props = load_any(source)?;
    if is_xml(dest) {
        props.save_xml(dest)?;
    } else {
        props.save(dest)?;
    }
    Ok(())
}

/// Run the convert command and return the exit code.
pub fn run_convert(args: &ConvertArgs) -> i32 {
    match convert_file(&args.source, &args.dest) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!(
                "{}: could not convert {}: {err}",
                "Error".bright_red(),
                args.source.display()
            );
            1
        }
    }
}
