// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    name = "propex",
    about = "Codec for Java .properties files with XML round-trip support.",
    after_help = "For help with a specific command, see: `propex help <command>`."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a file between the text and XML representations
    Convert(ConvertArgs),

    /// Print file entries as JSON
    Dump(DumpArgs),

    /// Display statistics about files
    Stats(StatsArgs),
}

/// Arguments for the `convert` command.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source file, text or XML format chosen from its extension
    pub source: PathBuf,

    /// Destination file, format chosen from its extension (.xml for XML)
    pub dest: PathBuf,
}

/// Arguments for the `dump` command.
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// List of files, text or XML format chosen from their extensions
    pub files: Vec<PathBuf>,
}

/// Arguments for the `stats` command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// List of files or directories (default: .)
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Sort files displayed
    #[arg(short, long, value_enum, default_value_t)]
    pub sort: StatsSort,
}

/// Output format.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sort in stats output.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsSort {
    #[default]
    /// Sort by path
    Path,

    /// Sort by entry count (largest first), then by path
    Count,
}
