//! Author: [Seclususs](https://github.com/seclususs)

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

pub enum TraversalAction {
    Collect,
    Descend,
    Skip,
}

/// Walks `dir` in name order without following symlinks. Entries the
/// callback collects are not descended into.
pub fn walk_and_collect<F>(
    dir: &Path,
    callback: &F,
    depth: usize,
    max_depth: usize,
    found: &mut Vec<PathBuf>,
) -> io::Result<()>
where
    F: Fn(&DirEntry, &fs::FileType) -> TraversalAction,
{
    if depth > max_depth {
        return Ok(());
    }
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(DirEntry::file_name);
    for entry in entries {
        let ft = entry.file_type()?;
        match callback(&entry, &ft) {
            TraversalAction::Collect => found.push(entry.path()),
            TraversalAction::Descend if ft.is_dir() => {
                walk_and_collect(&entry.path(), callback, depth + 1, max_depth, found)?;
            }
            TraversalAction::Descend | TraversalAction::Skip => {}
        }
    }
    Ok(())
}
