//! Glob-based ignore rules

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};

/// An ordered set of glob ignore patterns, compiled once at configuration
/// time. A root-relative path is excluded if any pattern matches it.
///
/// Matching is shell-style: `*` stays within one path component, `**` spans
/// any depth, `{a,b}` alternation is supported, and dot-files are matched
/// literally rather than being implicitly hidden. The literal path `"."` is
/// always excluded so the scan root is never treated as a visitable entry.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    set: GlobSet,
}

impl IgnoreSet {
    /// Compile a pattern list. Fails fast on the first malformed pattern.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| Error::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| Error::Pattern {
            pattern: String::new(),
            source,
        })?;
        Ok(Self { set })
    }

    /// Check a root-relative path against the rule set.
    pub fn matches(&self, rel_path: &str) -> bool {
        rel_path == "." || self.set.is_match(rel_path)
    }
}
