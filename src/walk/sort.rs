//! Sibling ordering rules

use std::cmp::Ordering;

use clap::ValueEnum;

use super::walker::Child;

/// Which attribute resolves ordering between two entries of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Modified,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort policy for one listing level. Directories always order before files
/// regardless of key; the key and direction only break ties within the same
/// kind (dir-vs-dir by name, file-vs-file by the key).
#[derive(Debug, Clone, Copy, Default)]
pub struct SortPolicy {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortPolicy {
    /// Whether this policy needs a metadata fetch per file child.
    pub(crate) fn needs_metadata(&self) -> bool {
        matches!(self.key, SortKey::Size | SortKey::Modified)
    }
}

/// Lower-cased extension of a base name: the characters after the final `.`,
/// or empty when there is none. A leading-dot name like `.gitignore` has no
/// extension.
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

pub(crate) fn sort_children(children: &mut [Child], policy: SortPolicy) {
    children.sort_by(|a, b| {
        match (a.is_dir, b.is_dir) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let ordering = if a.is_dir {
            a.name.cmp(&b.name)
        } else {
            compare_files(a, b, policy.key)
        };
        match policy.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_files(a: &Child, b: &Child, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Modified => a.modified.cmp(&b.modified),
        SortKey::Type => extension_of(&a.name)
            .cmp(&extension_of(&b.name))
            .then_with(|| a.name.cmp(&b.name)),
    }
}
