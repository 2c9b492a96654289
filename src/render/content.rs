//! Content section emission

use std::fs;
use std::io::Write;

use crate::error::{Error, Result};
use crate::walk::{DepthState, Entry, Visitor, extension_of};

use super::options::RenderOptions;

/// Visitor for the content pass: applies the size/extension inclusion policy
/// per file, streams each included file's body into the sink, and records
/// every non-ignored file in exactly one of the included/excluded lists.
/// Directories are tree-view-only and fall through to the no-op default.
pub struct ContentWriter<'w, W: Write> {
    out: &'w mut W,
    max_file_size: Option<u64>,
    always_include: Vec<String>,
    template: Option<String>,
    included: Vec<String>,
    excluded: Vec<String>,
}

impl<'w, W: Write> ContentWriter<'w, W> {
    pub fn new(out: &'w mut W, options: &RenderOptions) -> Self {
        Self {
            out,
            max_file_size: options.max_file_size,
            always_include: options
                .always_include
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            template: options.template.clone(),
            included: Vec::new(),
            excluded: Vec::new(),
        }
    }

    pub fn into_lists(self) -> (Vec<String>, Vec<String>) {
        (self.included, self.excluded)
    }

    /// Size policy: over the limit and not allowlisted means the file is
    /// recorded as excluded and emits nothing. Not an error.
    fn excluded_by_size(&self, entry: &Entry<'_>, extension: &str) -> Result<bool> {
        let Some(max) = self.max_file_size else {
            return Ok(false);
        };
        if self.always_include.iter().any(|ext| ext == extension) {
            return Ok(false);
        }
        let size = fs::metadata(entry.path)
            .map_err(|e| Error::io(entry.path, e))?
            .len();
        Ok(size > max)
    }
}

impl<W: Write> Visitor for ContentWriter<'_, W> {
    fn on_file(&mut self, entry: &Entry<'_>, _state: &DepthState) -> Result<()> {
        let extension = extension_of(entry.name);

        if self.excluded_by_size(entry, &extension)? {
            self.excluded.push(entry.rel_path.to_string());
            return Ok(());
        }
        self.included.push(entry.rel_path.to_string());

        // A file that cannot be read as text aborts the scan.
        let content = fs::read_to_string(entry.path).map_err(|e| Error::io(entry.path, e))?;

        match &self.template {
            Some(template) => {
                let rendered = fill_template(template, entry.rel_path, &extension, &content);
                self.out
                    .write_all(rendered.as_bytes())
                    .map_err(Error::output)?;
                if !rendered.ends_with('\n') {
                    writeln!(self.out).map_err(Error::output)?;
                }
            }
            None => {
                write!(self.out, "## {}\n\n```{extension}\n", entry.rel_path)
                    .map_err(Error::output)?;
                self.out
                    .write_all(content.as_bytes())
                    .map_err(Error::output)?;
                if !content.ends_with('\n') {
                    writeln!(self.out).map_err(Error::output)?;
                }
                writeln!(self.out, "```\n").map_err(Error::output)?;
            }
        }
        Ok(())
    }
}

/// Allowlist entries are compared case-insensitively with any leading `.`
/// stripped, so `.TS` and `ts` mean the same thing.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

/// Literal substring substitution; every occurrence of every placeholder is
/// replaced. Content is substituted last so placeholder-looking text inside a
/// file body never gets re-expanded.
fn fill_template(template: &str, path: &str, extension: &str, content: &str) -> String {
    template
        .replace("{{path}}", path)
        .replace("{{extension}}", extension)
        .replace("{{content}}", content)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::walk::{IgnoreSet, SortPolicy, Walker};

    fn run(root: &Path, options: &RenderOptions) -> (String, Vec<String>, Vec<String>) {
        let walker = Walker::new(
            root,
            IgnoreSet::new::<&str>(&[]).unwrap(),
            SortPolicy::default(),
        );
        let mut buf = Vec::new();
        let mut writer = ContentWriter::new(&mut buf, options);
        walker.walk(&mut writer).unwrap();
        let (included, excluded) = writer.into_lists();
        (String::from_utf8(buf).unwrap(), included, excluded)
    }

    #[test]
    fn test_default_emission() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();

        let (out, included, excluded) = run(dir.path(), &RenderOptions::default());
        assert_eq!(out, "## main.rs\n\n```rs\nfn main() {}\n```\n\n");
        assert_eq!(included, ["main.rs"]);
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_missing_trailing_newline_is_patched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("note.txt"), "no newline").unwrap();

        let (out, ..) = run(dir.path(), &RenderOptions::default());
        assert!(out.contains("no newline\n```\n"));
    }

    #[test]
    fn test_file_without_extension_gets_untagged_fence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();

        let (out, ..) = run(dir.path(), &RenderOptions::default());
        assert!(out.contains("## Makefile\n\n```\nall:\n```\n"));
    }

    #[test]
    fn test_size_limit_excludes_large_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("small.ts"), "x").unwrap();
        fs::write(dir.path().join("large.json"), "y".repeat(10_000)).unwrap();

        let options = RenderOptions {
            max_file_size: Some(1000),
            ..Default::default()
        };
        let (out, included, excluded) = run(dir.path(), &options);
        assert_eq!(included, ["small.ts"]);
        assert_eq!(excluded, ["large.json"]);
        assert!(!out.contains("large.json"));
    }

    #[test]
    fn test_size_equal_to_limit_is_included() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("exact.txt"), "x".repeat(1000)).unwrap();

        let options = RenderOptions {
            max_file_size: Some(1000),
            ..Default::default()
        };
        let (_, included, excluded) = run(dir.path(), &options);
        assert_eq!(included, ["exact.txt"]);
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_allowlisted_extension_beats_size_limit() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("large.json"), "y".repeat(10_000)).unwrap();

        let options = RenderOptions {
            max_file_size: Some(1000),
            always_include: vec![".JSON".to_string()],
            ..Default::default()
        };
        let (out, included, excluded) = run(dir.path(), &options);
        assert_eq!(included, ["large.json"]);
        assert!(excluded.is_empty());
        assert!(out.contains("## large.json"));
    }

    #[test]
    fn test_included_and_excluded_are_disjoint() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "y".repeat(5000)).unwrap();
        fs::write(dir.path().join("c.txt"), "z").unwrap();

        let options = RenderOptions {
            max_file_size: Some(1000),
            ..Default::default()
        };
        let (_, included, excluded) = run(dir.path(), &options);
        assert!(included.iter().all(|p| !excluded.contains(p)));
        assert_eq!(included.len() + excluded.len(), 3);
    }

    #[test]
    fn test_template_substitutes_every_occurrence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.ts"), "let x = 1;\n").unwrap();

        let options = RenderOptions {
            template: Some("{{path}} ({{extension}}) {{path}}\n{{content}}".to_string()),
            ..Default::default()
        };
        let (out, ..) = run(dir.path(), &options);
        assert_eq!(out, "app.ts (ts) app.ts\nlet x = 1;\n");
    }

    #[test]
    fn test_template_content_is_not_reexpanded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tricky.txt"), "literal {{path}} inside\n").unwrap();

        let options = RenderOptions {
            template: Some("{{content}}".to_string()),
            ..Default::default()
        };
        let (out, ..) = run(dir.path(), &options);
        assert_eq!(out, "literal {{path}} inside\n");
    }

    #[test]
    fn test_unreadable_file_aborts_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("binary.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let walker = Walker::new(
            dir.path(),
            IgnoreSet::new::<&str>(&[]).unwrap(),
            SortPolicy::default(),
        );
        let options = RenderOptions::default();
        let mut buf = Vec::new();
        let mut writer = ContentWriter::new(&mut buf, &options);
        assert!(walker.walk(&mut writer).is_err());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".TS"), "ts");
        assert_eq!(normalize_extension("Json"), "json");
        assert_eq!(normalize_extension("rs"), "rs");
    }
}
