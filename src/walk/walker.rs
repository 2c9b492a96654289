//! Recursive directory traversal

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};

use super::ignore::IgnoreSet;
use super::sort::{SortPolicy, sort_children};
use super::state::DepthState;

/// Discriminator for a visited filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One filesystem node delivered to a [`Visitor`], with the positional
/// metadata needed for tree rendering.
#[derive(Debug)]
pub struct Entry<'a> {
    /// Full path of the node.
    pub path: &'a Path,
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: &'a str,
    /// Base name.
    pub name: &'a str,
    pub kind: EntryKind,
    /// Root children have depth 0.
    pub depth: usize,
    /// Whether this is the final entry among its sorted siblings.
    pub is_last: bool,
}

/// Per-entry callbacks invoked by [`Walker::walk`] in strict traversal order.
pub trait Visitor {
    fn on_file(&mut self, entry: &Entry<'_>, state: &DepthState) -> Result<()>;

    fn on_dir(&mut self, _entry: &Entry<'_>, _state: &DepthState) -> Result<()> {
        Ok(())
    }
}

/// One directory child, listed and sorted before any recursion into it.
/// Size and mtime are populated only when the sort policy needs them.
#[derive(Debug)]
pub(crate) struct Child {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) rel_path: String,
    pub(crate) is_dir: bool,
    pub(crate) size: u64,
    pub(crate) modified: SystemTime,
}

/// Depth-first traversal engine: enumerates one directory level at a time,
/// filters it against the ignore set, sorts it directories-first, and visits
/// each entry sequentially. A directory's callback completes before its
/// children are visited, and one sibling's subtree completes before the next
/// sibling's callback begins.
pub struct Walker {
    root: PathBuf,
    ignore: IgnoreSet,
    sort: SortPolicy,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, ignore: IgnoreSet, sort: SortPolicy) -> Self {
        Self {
            root: root.into(),
            ignore,
            sort,
        }
    }

    /// Visit every non-ignored entry under the root. Listing, stat, or
    /// visitor errors abort the walk immediately.
    pub fn walk<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        let mut state = DepthState::new();
        self.walk_dir(&self.root, "", 0, &mut state, visitor)
    }

    fn walk_dir<V: Visitor>(
        &self,
        dir: &Path,
        rel_dir: &str,
        depth: usize,
        state: &mut DepthState,
        visitor: &mut V,
    ) -> Result<()> {
        let children = self.list_children(dir, rel_dir)?;
        let total = children.len();

        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == total;
            let entry = Entry {
                path: &child.path,
                rel_path: &child.rel_path,
                name: &child.name,
                kind: if child.is_dir {
                    EntryKind::Dir
                } else {
                    EntryKind::File
                },
                depth,
                is_last,
            };

            if child.is_dir {
                visitor.on_dir(&entry, state)?;
                state.set_open(depth, !is_last);
                self.walk_dir(&child.path, &child.rel_path, depth + 1, state, visitor)?;
                // This subtree is closed; siblings at shallower depths must
                // not see a stale open flag.
                state.set_open(depth, false);
            } else {
                visitor.on_file(&entry, state)?;
            }
        }

        Ok(())
    }

    /// One filesystem read per level: list, filter, and sort the immediate
    /// children of `dir` before recursing into any of them.
    fn list_children(&self, dir: &Path, rel_dir: &str) -> Result<Vec<Child>> {
        let read = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut children = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = if rel_dir.is_empty() {
                name.clone()
            } else {
                format!("{rel_dir}/{name}")
            };

            if self.ignore.matches(&rel_path) {
                continue;
            }

            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            // Skip symlinks to keep the recursion cycle-free.
            if file_type.is_symlink() {
                continue;
            }
            let is_dir = file_type.is_dir();

            let (size, modified) = if !is_dir && self.sort.needs_metadata() {
                let meta = entry.metadata().map_err(|e| Error::io(entry.path(), e))?;
                let modified = meta.modified().map_err(|e| Error::io(entry.path(), e))?;
                (meta.len(), modified)
            } else {
                (0, SystemTime::UNIX_EPOCH)
            };

            children.push(Child {
                name,
                path: entry.path(),
                rel_path,
                is_dir,
                size,
                modified,
            });
        }

        sort_children(&mut children, self.sort);
        Ok(children)
    }
}
