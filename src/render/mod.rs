//! Content renderer
//!
//! Drives the traversal engine twice over the same tree: a tree-view pass
//! that writes connector lines into a fenced block, then a content pass that
//! streams file bodies. Both passes append incrementally to the same sink, so
//! a scan of arbitrarily many files never holds the whole document in memory.

mod content;
mod options;
mod tree_view;

pub use content::ContentWriter;
pub use options::RenderOptions;
pub use tree_view::TreeView;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::walk::{IgnoreSet, Walker};

/// Outcome of one full scan: ordered relative paths of every non-ignored
/// file, partitioned into content-included and size-excluded. Disjoint by
/// construction.
#[derive(Debug, Default, Serialize)]
pub struct RenderSummary {
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

/// Render the full Markdown document to the configured output file, then
/// write the optional included/excluded path lists.
///
/// When the output file sits inside the scan root it is added to the ignore
/// set, so the document never lists or embeds itself.
pub fn render(options: &RenderOptions) -> Result<RenderSummary> {
    let mut options = options.clone();
    if let Some(pattern) = output_rel_pattern(&options.directory, &options.output) {
        options.ignore.push(pattern);
    }
    let options = &options;

    // Validate the root before touching the output file, so a bad scan root
    // never clobbers an existing document.
    validate_root(&options.directory)?;

    let file = File::create(&options.output).map_err(|e| Error::io(&options.output, e))?;
    let mut out = BufWriter::new(file);
    let summary = render_to_writer(options, &mut out)?;
    out.flush().map_err(Error::output)?;

    if let Some(path) = &options.included_out {
        write_path_list(path, &summary.included)?;
    }
    if let Some(path) = &options.excluded_out {
        write_path_list(path, &summary.excluded)?;
    }

    Ok(summary)
}

/// Render into any sink. Fails fast on a missing or non-directory scan root
/// and on malformed ignore patterns; the first I/O failure mid-scan aborts.
pub fn render_to_writer<W: Write>(options: &RenderOptions, out: &mut W) -> Result<RenderSummary> {
    validate_root(&options.directory)?;

    let ignore = IgnoreSet::new(&options.ignore)?;
    let walker = Walker::new(&options.directory, ignore, options.sort);

    if let Some(header) = &options.header {
        writeln!(out, "{header}").map_err(Error::output)?;
        writeln!(out).map_err(Error::output)?;
    }

    writeln!(out, "# Tree View\n\n```").map_err(Error::output)?;
    let mut tree = TreeView::new(out);
    walker.walk(&mut tree)?;
    writeln!(out, "```\n\n# Content\n").map_err(Error::output)?;

    let mut content = ContentWriter::new(out, options);
    walker.walk(&mut content)?;
    let (included, excluded) = content.into_lists();

    Ok(RenderSummary { included, excluded })
}

fn validate_root(directory: &Path) -> Result<()> {
    let meta = fs::metadata(directory).map_err(|e| Error::io(directory, e))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: directory.to_path_buf(),
        });
    }
    Ok(())
}

/// Root-relative ignore pattern for the output file, when it lives inside the
/// scan root. The output may not exist yet, so only its parent is resolved.
fn output_rel_pattern(directory: &Path, output: &Path) -> Option<String> {
    let dir = fs::canonicalize(directory).ok()?;
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let out = fs::canonicalize(parent).ok()?.join(output.file_name()?);
    let rel = out.strip_prefix(&dir).ok()?;
    Some(globset::escape(&rel.to_string_lossy()))
}

/// Overwrite semantics, unlike the document sink's append-only writes.
fn write_path_list(path: &Path, paths: &[String]) -> Result<()> {
    let mut text = paths.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Print the scan summary as pretty-printed JSON to stdout.
pub fn print_summary_json(summary: &RenderSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
