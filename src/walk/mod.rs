//! Directory traversal engine
//!
//! [`Walker`] enumerates a directory tree depth-first, one listing per level:
//! filter against the [`IgnoreSet`], sort directories-first under the
//! [`SortPolicy`], then visit each entry sequentially through a [`Visitor`].
//! [`DepthState`] carries the per-depth open-subtree flags that tree
//! connectors are rendered from.

mod ignore;
mod sort;
mod state;
mod walker;

pub use ignore::IgnoreSet;
pub use sort::{SortDirection, SortKey, SortPolicy, extension_of};
pub use state::DepthState;
pub use walker::{Entry, EntryKind, Visitor, Walker};
