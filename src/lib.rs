//! Read, query, update and rewrite INI configuration files.
//!
//! ```
//! use inidoc::Document;
//!
//! let mut doc = Document::from_lines(["[Net]", "host=localhost", "port=8080"]);
//! assert_eq!(doc.get_value("Net", "port").map(|p| p.value), Some("8080"));
//!
//! doc.set_value("Net", "port", "9090").unwrap();
//! assert_eq!(doc.serialize().unwrap(), "[Net]\nhost=localhost\nport=9090\n");
//! ```

pub mod colors;
pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod format;
mod output;
pub mod parser;
pub mod progress;
pub mod walker;
pub mod writer;

pub use colors::{should_use_colors, Colors};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_fmt_config, CliFmtOptions,
    ConfigError, FmtConfig, FmtSection, InidocToml, INIDOC_TOML_TEMPLATE,
};
pub use document::Document;
pub use entry::{Entry, Pair};
pub use error::{LoadError, SaveError, SetValueError};
pub use format::{format_content, FormatResult, Problem, ProblemKind};
pub use output::{print_diff, Config, OutputContext, OutputMode, RunResult};
pub use progress::ProgressReporter;
pub use walker::walk_paths;

use std::fs;
use std::io;
use std::path::Path;

/// Format every INI file under `paths`.
pub fn run(paths: &[String], config: &Config, ctx: &OutputContext) -> io::Result<RunResult> {
    let mut result = RunResult::default();

    // Count files for progress bar (2-pass approach)
    let file_count: u64 = walk_paths(paths, &config.fmt).filter_map(|r| r.ok()).count() as u64;

    let progress = ProgressReporter::new(file_count, ctx.show_progress);

    for path in walk_paths(paths, &config.fmt) {
        let path = path?;

        if let Some(name) = path.file_name() {
            progress.set_message(&name.to_string_lossy());
        }

        if let Err(e) = process_file(&path, config, &mut result, ctx) {
            log::error!("error processing {}: {e}", path.display());
        }

        progress.inc();
    }

    progress.finish();

    output::print_summary(&result, config, ctx);

    Ok(result)
}

fn process_file(
    path: &Path,
    config: &Config,
    result: &mut RunResult,
    ctx: &OutputContext,
) -> io::Result<()> {
    let bytes = fs::read(path)?;

    if bytes.is_empty() {
        result.files_skipped += 1;
        if ctx.verbose {
            output::print_skipped(path, "empty", ctx);
        }
        return Ok(());
    }

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => {
            result.files_skipped += 1;
            if ctx.verbose {
                output::print_skipped(path, "non-UTF-8", ctx);
            }
            return Ok(());
        }
    };

    let Some(format_result) = format_content(&content) else {
        result.files_skipped += 1;
        if ctx.verbose {
            output::print_skipped(path, "no entries", ctx);
        }
        return Ok(());
    };

    if !format_result.has_changes() {
        if ctx.verbose {
            output::print_checked(path, ctx);
        }
        return Ok(());
    }

    if config.check_only {
        result.files_unformatted += 1;
        output::print_check_result(path, &format_result, ctx);
    } else {
        fs::write(path, &format_result.content)?;
        result.files_formatted += 1;
        log::info!("formatted {}", path.display());
        output::print_fix_result(path, &format_result, ctx);
    }

    Ok(())
}
