// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON dump of properties files.

use colored::Colorize;

use crate::args::DumpArgs;
use crate::convert::load_any;

/// Run the dump command and return the exit code.
///
/// The entries of every readable file are printed as a single JSON object
/// keyed by path; unreadable files are reported on stderr.
pub fn run_dump(args: &DumpArgs) -> i32 {
    let mut rc = 0;
    let mut dump = serde_json::Map::new();
    for path in &args.files {
        match load_any(path) {
            Ok(props) => {
                dump.insert(
                    path.display().to_string(),
                    serde_json::to_value(props.as_map()).unwrap_or_default(),
                );
            }
            Err(err) => {
                eprintln!(
                    "{}: could not read {}: {err}",
                    "Error".bright_red(),
                    path.display()
                );
                rc = 1;
            }
        }
    }
    println!("{}", serde_json::Value::Object(dump));
    rc
}
