//! Corpus discovery using the `ignore` crate's walker.
//!
//! Every file under the root is considered (no ignore files, hidden files
//! included); only configured extensions are returned. Entries are sorted by
//! file name at each level so discovery order is deterministic.

use std::path::{Path, PathBuf};

use evolve_core::config::RetrievalConfig;
use tracing::debug;

/// A corpus file loaded as text.
#[derive(Debug, Clone)]
pub struct CorpusDocument {
    pub path: PathBuf,
    pub text: String,
}

/// List indexable files under `root`. A missing root yields an empty list.
pub fn discover(root: &Path, config: &RetrievalConfig) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "corpus directory missing: nothing to index");
        return Vec::new();
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable corpus entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.accepts_extension(ext));
        if accepted {
            files.push(path);
        }
    }
    files
}

/// Read a file, replacing malformed UTF-8 instead of failing.
pub fn read_lossy(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable corpus file");
            None
        }
    }
}

/// Discover and read every indexable file under `root`.
pub fn load(root: &Path, config: &RetrievalConfig) -> Vec<CorpusDocument> {
    discover(root, config)
        .into_iter()
        .filter_map(|path| read_lossy(&path).map(|text| CorpusDocument { path, text }))
        .collect()
}
