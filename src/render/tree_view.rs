//! ASCII tree rendering

use std::io::Write;

use crate::error::{Error, Result};
use crate::walk::{DepthState, Entry, EntryKind, Visitor};

const BAR: &str = "│   ";
const BLANK: &str = "    ";
const BRANCH: &str = "├── ";
const BRANCH_LAST: &str = "└── ";

/// Visitor that renders one connector line per entry. Indentation for an
/// entry at depth `d` is one segment per level `0..d`: a continuation bar
/// where that level's subtree is still open, blanks where it is closed.
pub struct TreeView<'w, W: Write> {
    out: &'w mut W,
}

impl<'w, W: Write> TreeView<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    fn line(&mut self, entry: &Entry<'_>, state: &DepthState) -> Result<()> {
        let mut line = String::new();
        for level in 0..entry.depth {
            line.push_str(if state.is_open(level) { BAR } else { BLANK });
        }
        line.push_str(if entry.is_last { BRANCH_LAST } else { BRANCH });
        line.push_str(entry.name);
        if entry.kind == EntryKind::Dir {
            line.push('/');
        }
        writeln!(self.out, "{line}").map_err(Error::output)
    }
}

impl<W: Write> Visitor for TreeView<'_, W> {
    fn on_file(&mut self, entry: &Entry<'_>, state: &DepthState) -> Result<()> {
        self.line(entry, state)
    }

    fn on_dir(&mut self, entry: &Entry<'_>, state: &DepthState) -> Result<()> {
        self.line(entry, state)
    }
}
