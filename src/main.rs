// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Propex is a codec for Java `.properties` files and their XML counterpart.
//!
//! The following sub-commands are available:
//!
//! - [`convert`](#convert): convert files between the text and XML formats
//! - [`dump`](#dump): print file entries as JSON
//! - [`stats`](#stats): display statistics about files
//!
//! # Convert
//!
//! The `convert` command reads a properties file in either representation
//! and writes it in the representation matching the destination extension
//! (`.xml` for the XML document shape, text otherwise).
//!
//! # Dump
//!
//! The `dump` command prints the entries of the given files as a single
//! JSON object keyed by path.
//!
//! # Stats
//!
//! The `stats` command displays statistics about properties files
//! (*.properties) given on command-line or found in the provided
//! directories.
//!
//! The .gitignore rules are respected: ignored files are skipped.

mod args;
mod convert;
mod dir;
mod dump;
mod stats;

use clap::Parser;

use crate::args::{Cli, Command};
use crate::convert::run_convert;
use crate::dump::run_dump;
use crate::stats::run_stats;

fn main() {
    let args = Cli::parse();
    let rc = match &args.command {
        Command::Convert(args) => run_convert(args),
        Command::Dump(args) => run_dump(args),
        Command::Stats(args) => run_stats(args),
    };
    std::process::exit(rc);
}
