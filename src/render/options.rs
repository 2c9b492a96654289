//! Resolved options for one render run

use std::path::PathBuf;

use crate::walk::SortPolicy;

/// The resolved options record the renderer consumes. The CLI (or any other
/// front-end) is responsible for producing this as plain data; nothing in the
/// core reads configuration files or arguments.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Scan root.
    pub directory: PathBuf,
    /// Markdown document to write.
    pub output: PathBuf,
    /// Glob ignore patterns, matched against root-relative paths.
    pub ignore: Vec<String>,
    /// Literal text emitted before the tree view.
    pub header: Option<String>,
    /// Files larger than this many bytes are excluded from the content
    /// section (the tree view still lists them).
    pub max_file_size: Option<u64>,
    /// Extensions exempt from the size limit. Compared case-insensitively,
    /// with any leading `.` stripped.
    pub always_include: Vec<String>,
    /// Per-file template with `{{path}}`, `{{extension}}`, and `{{content}}`
    /// placeholders. Defaults to a heading plus a tagged fenced code block.
    pub template: Option<String>,
    pub sort: SortPolicy,
    /// Newline-joined list of included paths, written after the scan.
    pub included_out: Option<PathBuf>,
    /// Newline-joined list of size-excluded paths, written after the scan.
    pub excluded_out: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: PathBuf::from("codebase.md"),
            ignore: Vec::new(),
            header: None,
            max_file_size: None,
            always_include: Vec::new(),
            template: None,
            sort: SortPolicy::default(),
            included_out: None,
            excluded_out: None,
        }
    }
}
