// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory utilities.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use colored::Colorize;
use ignore::WalkBuilder;

/// Collect the properties files to process.
///
/// Paths naming a file are taken as-is, whatever their extension;
/// directories are searched recursively for `*.properties` files. The
/// .gitignore rules are respected during the search: ignored files are
/// skipped.
pub fn find_properties_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut roots: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            roots.push(path.clone());
        } else {
            files.push(path.clone());
        }
    }
    if paths.is_empty() {
        roots.push(PathBuf::from("."));
    }

    if let Some((first, rest)) = roots.split_first() {
        let mut builder = WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }
        builder.follow_links(false);

        let found = Arc::new(Mutex::new(HashSet::new()));
        builder.build_parallel().run(|| {
            let found = Arc::clone(&found);
            Box::new(move |entry| {
                match entry {
                    Ok(dirent) => {
                        if dirent.file_type().is_some_and(|ft| ft.is_file())
                            && dirent
                                .path()
                                .extension()
                                .is_some_and(|ext| ext == "properties")
                        {
                            let mut found = found.lock().unwrap();
                            found.insert(
                                dirent
                                    .path()
                                    .strip_prefix("./")
                                    .unwrap_or(dirent.path())
                                    .to_path_buf(),
                            );
                        }
                    }
                    Err(err) => {
                        eprintln!("{}: could not read entry: {err}", "Warning".yellow());
                    }
                }
                ignore::WalkState::Continue
            })
        });
        files.extend(found.lock().unwrap().iter().cloned());
    }

    files.sort();
    files.dedup();
    files
}
