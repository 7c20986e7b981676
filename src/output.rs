use crate::colors::Colors;
use crate::config::FmtConfig;
use crate::format::{FormatResult, ProblemKind};
use similar::{ChangeTag, TextDiff};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

/// Settings for one `inidoc fmt` run.
pub struct Config {
    pub check_only: bool,
    pub fmt: FmtConfig,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
    pub show_progress: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool, show_progress: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
            show_progress,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files_formatted: usize,
    pub files_unformatted: usize,
    pub files_skipped: usize,
}

impl RunResult {
    pub fn has_problems(&self) -> bool {
        self.files_unformatted > 0
    }
}

fn print_dropped_lines(result: &FormatResult) {
    for problem in &result.problems {
        match problem.kind {
            ProblemKind::Comment => {
                println!("  - comment dropped at line {}", problem.line);
            }
            ProblemKind::MalformedLine => {
                println!("  - malformed line dropped at line {} (no '=')", problem.line);
            }
        }
    }
}

pub fn print_check_result(path: &Path, result: &FormatResult, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", path.display()),
        OutputMode::Diff => print_diff(
            &path.display().to_string(),
            &result.original,
            &result.content,
        ),
        OutputMode::Normal => {
            println!(
                "{}Unformatted:{} {}",
                ctx.colors.error,
                ctx.colors.reset(),
                path.display()
            );
            print_dropped_lines(result);
        }
    }
}

pub fn print_fix_result(path: &Path, result: &FormatResult, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", path.display()),
        OutputMode::Diff => print_diff(
            &path.display().to_string(),
            &result.original,
            &result.content,
        ),
        OutputMode::Normal => {
            for problem in result
                .problems
                .iter()
                .filter(|p| p.kind == ProblemKind::MalformedLine)
            {
                println!(
                    "{}Warning:{} {}:{} malformed line dropped",
                    ctx.colors.warning,
                    ctx.colors.reset(),
                    path.display(),
                    problem.line
                );
            }
            println!(
                "{}Formatted:{} {}",
                ctx.colors.success,
                ctx.colors.reset(),
                path.display()
            );
        }
    }
}

pub fn print_checked(path: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{}Checked:{} {}",
        ctx.colors.info,
        ctx.colors.reset(),
        path.display()
    );
}

pub fn print_skipped(path: &Path, reason: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{}Skipping {}: {}{}",
        ctx.colors.info,
        reason,
        ctx.colors.reset(),
        path.display()
    );
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

pub fn print_summary(result: &RunResult, config: &Config, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    if config.check_only {
        if result.files_unformatted > 0 {
            println!();
            println!(
                "{}{} files would be reformatted{}",
                ctx.colors.error,
                result.files_unformatted,
                ctx.colors.reset()
            );
        }
    } else if result.files_formatted > 0 {
        println!();
        println!(
            "{}{} files formatted{}",
            ctx.colors.success,
            result.files_formatted,
            ctx.colors.reset()
        );
    }
}
