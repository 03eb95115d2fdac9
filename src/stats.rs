// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statistics for properties files.

use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use propex::Properties;

use crate::args::{self, StatsSort};
use crate::dir::find_properties_files;

#[derive(Default, Serialize)]
struct StatsFile {
    path: PathBuf,
    entries: usize,
    key_chars: u64,
    value_chars: u64,
    empty_values: usize,
}

impl std::fmt::Display for StatsFile {
    /// Format the `StatsFile` for display: entry count and sizes.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            format!("{:6}", self.entries).bright_green(),
            "entries".green(),
            format!("({} empty)", self.empty_values).dimmed(),
            format!("{:8}", self.key_chars).cyan(),
            format!("key chars, {:8} value chars", self.value_chars).cyan(),
        )
    }
}

impl StatsFile {
    /// Compute statistics for a single properties file at the given path.
    fn read(path: &Path) -> propex::Result<Self> {
        let mut props = Properties::new();
        props.load(path)?;
        let mut stats = Self {
            path: PathBuf::from(path),
            entries: props.len(),
            ..Default::default()
        };
        for (key, value) in props.iter() {
            stats.key_chars += key.chars().count() as u64;
            stats.value_chars += value.chars().count() as u64;
            if value.is_empty() {
                stats.empty_values += 1;
            }
        }
        Ok(stats)
    }
}

/// Compute the total over all statistics.
fn compute_total_stats(stats: &[StatsFile]) -> StatsFile {
    let mut total = StatsFile {
        path: PathBuf::from(format!("Total ({})", stats.len())),
        ..Default::default()
    };
    for stat in stats {
        total.entries += stat.entries;
        total.key_chars += stat.key_chars;
        total.value_chars += stat.value_chars;
        total.empty_values += stat.empty_values;
    }
    total
}

/// Display statistics, formatted according to the arguments.
fn display_stats(stats: &[StatsFile], args: &args::StatsArgs) -> i32 {
    match args.output {
        args::OutputFormat::Human => {
            let path_max_len = stats
                .iter()
                .map(|s| s.path.as_os_str().len())
                .max()
                .unwrap_or(0);
            for stat in stats {
                println!(
                    "{:width$} {}",
                    stat.path.display(),
                    stat,
                    width = path_max_len
                );
            }
        }
        args::OutputFormat::Json => {
            println!("{}", serde_json::to_string(&stats).unwrap_or_default());
        }
    }
    0
}

/// Compute and display statistics for all properties files.
pub fn run_stats(args: &args::StatsArgs) -> i32 {
    let files = find_properties_files(&args.files);
    let mut stats: Vec<StatsFile> = files
        .par_iter()
        .map(|f| {
            StatsFile::read(f).map_err(|e| {
                eprintln!("Error processing file {}: {}", f.display(), e);
                e
            })
        })
        .filter_map(Result::ok)
        .collect();
    match args.sort {
        StatsSort::Path => {
            stats.sort_by(|a, b| a.path.cmp(&b.path));
        }
        StatsSort::Count => {
            stats.sort_by_key(|s| (usize::MAX - s.entries, s.path.clone()));
        }
    }
    if stats.len() > 1 {
        stats.push(compute_total_stats(&stats));
    }
    display_stats(&stats, args)
}
