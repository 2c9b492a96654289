//! CLI entry point for canopy

use std::path::PathBuf;
use std::process;

use canopy::{RenderOptions, SortDirection, SortKey, SortPolicy, print_summary_json, render};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Flatten a directory tree into a single Markdown document")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Markdown file to write
    #[arg(short = 'o', long = "output", default_value = "codebase.md")]
    output: PathBuf,

    /// Ignore paths matching a glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Literal header text emitted before the tree view
    #[arg(long = "header")]
    header: Option<String>,

    /// Skip content of files larger than SIZE.
    /// Use suffixes: K, M, G (e.g. 5M for 5MB); without suffix, bytes
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Extension exempt from the size limit (can be used multiple times)
    #[arg(long = "always-include", value_name = "EXT")]
    always_include: Vec<String>,

    /// Per-file template with {{path}}, {{extension}}, and {{content}}
    /// placeholders
    #[arg(long = "template")]
    template: Option<String>,

    /// Sort siblings by this attribute (directories always come first)
    #[arg(long = "sort", value_enum, default_value_t = SortKey::Name)]
    sort: SortKey,

    /// Sort direction
    #[arg(long = "direction", value_enum, default_value_t = SortDirection::Asc)]
    direction: SortDirection,

    /// Write the list of content-included paths to this file
    #[arg(long = "included-out", value_name = "FILE")]
    included_out: Option<PathBuf>,

    /// Write the list of size-excluded paths to this file
    #[arg(long = "excluded-out", value_name = "FILE")]
    excluded_out: Option<PathBuf>,

    /// Print the scan summary as JSON to stdout
    #[arg(long = "summary-json")]
    summary_json: bool,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(num * multiplier)
}

fn main() {
    let args = Args::parse();

    let max_file_size = args.max_file_size.as_ref().map(|s| {
        parse_file_size(s).unwrap_or_else(|e| {
            eprintln!("canopy: invalid --max-file-size '{}': {}", s, e);
            process::exit(1);
        })
    });

    let options = RenderOptions {
        directory: args.directory,
        output: args.output,
        ignore: args.ignore,
        header: args.header,
        max_file_size,
        always_include: args.always_include,
        template: args.template,
        sort: SortPolicy {
            key: args.sort,
            direction: args.direction,
        },
        included_out: args.included_out,
        excluded_out: args.excluded_out,
    };

    let summary = match render(&options) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    if args.summary_json {
        if let Err(e) = print_summary_json(&summary) {
            eprintln!("canopy: error writing output: {}", e);
            process::exit(1);
        }
    } else {
        println!(
            "{} files included, {} excluded -> {}",
            summary.included.len(),
            summary.excluded.len(),
            options.output.display()
        );
    }
}
