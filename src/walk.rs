//! YAML file collection
//!
//! Walks the scan root and collects every `*.yaml` file that is not hidden
//! and not named by the ignore list. Directories that are hidden or ignored
//! are pruned, so nothing beneath them is visited.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::trace;

use crate::error::Result;
use crate::ignore_list::IgnoreSet;

/// Extension (including the dot) of the files the walker collects
pub const YAML_SUFFIX: &str = ".yaml";

/// Collect all YAML files under `root`.
///
/// Returned paths are relative to `root`. Entries within a directory are
/// visited in file-name order, so the result is stable across filesystems.
pub fn collect_yaml_files(root: &Path, ignore_set: &IgnoreSet) -> Result<Vec<PathBuf>> {
    let filter_root = root.to_path_buf();
    let filter_set = ignore_set.clone();

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.depth() == 0 || !should_skip_entry(&filter_root, entry, &filter_set)
        });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if !is_dir && is_yaml_name(entry.file_name()) {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            trace!(path = %rel.display(), "collected");
            files.push(rel);
        }
    }

    Ok(files)
}

fn should_skip_entry(root: &Path, entry: &DirEntry, ignore_set: &IgnoreSet) -> bool {
    if should_skip_name(entry.file_name()) {
        return true;
    }
    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let skip = ignore_set.matches(&rel_path_string(rel));
    if skip {
        trace!(path = %rel.display(), "ignored");
    }
    skip
}

/// Hidden entries (name starting with '.') are never visited.
pub fn should_skip_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Whether a file name has the collected YAML suffix (case-sensitive).
pub fn is_yaml_name(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(YAML_SUFFIX)
}

/// Render a relative path with `/` separators, dropping `.` components.
pub fn rel_path_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
