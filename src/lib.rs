//! Canopy - flattens a directory tree into a single Markdown document

pub mod error;
pub mod render;
pub mod walk;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use render::{
    ContentWriter, RenderOptions, RenderSummary, TreeView, print_summary_json, render,
    render_to_writer,
};
pub use walk::{
    DepthState, Entry, EntryKind, IgnoreSet, SortDirection, SortKey, SortPolicy, Visitor, Walker,
};
