//! Startup font-directory scan for fontshelf-core

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use walkdir::WalkDir;

use crate::face::Face;

/// One font on the shelf: where it came from and its opened face.
#[derive(Debug)]
pub struct FontEntry {
    pub path: PathBuf,
    pub face: Face,
}

/// What the scan saw: every direct entry visited, and how many of those
/// became catalog entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub visited: usize,
    pub loaded: usize,
}

/// Index from face name to [`FontEntry`], built once at startup and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct FontCatalog {
    entries: BTreeMap<String, FontEntry>,
}

impl FontCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `name`. Duplicate names overwrite the earlier
    /// entry; the last face scanned under a name wins.
    pub fn insert(&mut self, name: String, entry: FontEntry) {
        self.entries.insert(name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&FontEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scan the direct entries of `root` and open each one as a face.
    ///
    /// Every entry counts toward `visited`. Dot-prefixed names are skipped
    /// before any open is attempted. An entry that fails to open is skipped
    /// without a diagnostic; the open error is discarded here and nowhere
    /// else. A missing or unreadable root is the only fatal condition.
    pub fn scan(root: &Path) -> Result<(Self, ScanReport)> {
        if !root.is_dir() {
            return Err(anyhow!(
                "font directory does not exist: {}",
                root.display()
            ));
        }

        let mut catalog = Self::new();
        let mut report = ScanReport::default();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                // Root errors are fatal; per-entry trouble is counted
                // toward visited and skipped like any unopenable file.
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(_) => {
                    report.visited += 1;
                    continue;
                }
            };
            report.visited += 1;

            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            // Symlinked fonts open like any other entry; directories fail
            // the open and are swallowed with the rest.
            match Face::open(entry.path()) {
                Ok(face) => {
                    let name = face.name().to_string();
                    catalog.insert(
                        name,
                        FontEntry {
                            path: entry.path().to_path_buf(),
                            face,
                        },
                    );
                }
                Err(_) => continue,
            }
        }

        // Indexed count, not open count: name collisions collapse.
        report.loaded = catalog.len();
        Ok((catalog, report))
    }
}
