use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use inidoc::{
    find_config_file, generate_init_file, load_config, merge_fmt_config, run,
    should_use_colors, CliFmtOptions, Colors, Config, Document, InidocToml, OutputContext,
    OutputMode,
};
use regex::Regex;

#[derive(Parser)]
#[command(name = "inidoc")]
#[command(version, about = "Read, query, update and rewrite INI files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Force colored output
    #[arg(long, global = true)]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value of KEY in CATEGORY
    Get {
        file: PathBuf,
        category: String,
        key: String,
    },
    /// Print all key=value pairs of CATEGORY
    List {
        file: PathBuf,
        category: String,
        /// Only keys matching this regular expression
        #[arg(long, value_name = "REGEX")]
        filter: Option<String>,
    },
    /// Print category names in document order
    Categories { file: PathBuf },
    /// Change the value of an existing key
    Set {
        file: PathBuf,
        category: String,
        key: String,
        value: String,
        /// Write the result to PATH instead of FILE
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Add CATEGORY if it does not exist yet
    AddCategory {
        file: PathBuf,
        category: String,
        /// Write the result to PATH instead of FILE
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Rewrite INI files into canonical form
    Fmt {
        /// Target files or directories
        #[arg(required = true)]
        paths: Vec<String>,

        /// Check only (no modifications), exit 1 if any file would change
        #[arg(short, long)]
        check: bool,

        /// Show changes in diff format
        #[arg(short, long)]
        diff: bool,

        /// Output only affected file names
        #[arg(short, long)]
        quiet: bool,

        /// File extension to pick up in directories (repeatable)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Also walk hidden files
        #[arg(long)]
        hidden: bool,
    },
    /// Generate a template inidoc.toml configuration file
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = init_logging(cli.verbose);
    let use_colors = should_use_colors(cli.color, cli.no_color);

    match cli.command {
        Command::Get {
            ref file,
            ref category,
            ref key,
        } => handle_get(file, category, key),
        Command::List {
            ref file,
            ref category,
            ref filter,
        } => handle_list(file, category, filter.as_deref(), use_colors),
        Command::Categories { ref file } => handle_categories(file, use_colors),
        Command::Set {
            ref file,
            ref category,
            ref key,
            ref value,
            ref output,
        } => handle_set(file, category, key, value, output.as_deref()),
        Command::AddCategory {
            ref file,
            ref category,
            ref output,
        } => handle_add_category(file, category, output.as_deref()),
        Command::Fmt {
            ref paths,
            check,
            diff,
            quiet,
            ref extensions,
            hidden,
        } => {
            let toml_config = load_configuration(&cli.config, quiet);
            let cli_options = CliFmtOptions {
                extensions: (!extensions.is_empty()).then(|| extensions.clone()),
                hidden: hidden.then_some(true),
            };
            let fmt = merge_fmt_config(&cli_options, toml_config.as_ref().map(|c| &c.fmt));

            let output_mode = if quiet {
                OutputMode::Quiet
            } else if diff {
                OutputMode::Diff
            } else {
                OutputMode::Normal
            };

            let config = Config {
                check_only: check,
                fmt,
            };
            let ctx = OutputContext::new(output_mode, use_colors, cli.verbose, !quiet);

            match run(paths, &config, &ctx) {
                Ok(result) if config.check_only && result.has_problems() => ExitCode::from(1),
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::from(1)
                }
            }
        }
        Command::Init => handle_init(),
    }
}

fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let level = if verbose { "info" } else { "warn" };
    Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| eprintln!("Warning: failed to initialize logging: {e}"))
        .ok()
}

fn open_document(file: &Path) -> Result<Document, ExitCode> {
    Document::load(file).map_err(|e| {
        eprintln!("Error: {e}");
        ExitCode::from(1)
    })
}

fn handle_get(file: &Path, category: &str, key: &str) -> ExitCode {
    let doc = match open_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    match doc.get_value(category, key) {
        Some(pair) => {
            println!("{}", pair.value);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: key {key:?} not found in category [{category}]");
            ExitCode::from(1)
        }
    }
}

fn handle_list(file: &Path, category: &str, filter: Option<&str>, use_colors: bool) -> ExitCode {
    let filter = match filter.map(Regex::new).transpose() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: invalid --filter: {e}");
            return ExitCode::from(2);
        }
    };

    let doc = match open_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    if !doc.contains_category(category) {
        eprintln!("Error: category [{category}] not found");
        return ExitCode::from(1);
    }

    let colors = Colors::new(use_colors);
    for pair in doc.get_values(category) {
        if filter.as_ref().is_some_and(|re| !re.is_match(pair.key)) {
            continue;
        }
        println!(
            "{}{}{}={}",
            colors.info,
            pair.key,
            colors.reset(),
            pair.value
        );
    }
    ExitCode::SUCCESS
}

fn handle_categories(file: &Path, use_colors: bool) -> ExitCode {
    let doc = match open_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    let colors = Colors::new(use_colors);
    for name in doc.categories() {
        println!("{}{name}{}", colors.category, colors.reset());
    }
    ExitCode::SUCCESS
}

fn save_document(doc: &mut Document, output: Option<&Path>) -> ExitCode {
    let saved = match output {
        Some(path) => doc.save_as(path),
        None => doc.save(),
    };
    match saved {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn handle_set(
    file: &Path,
    category: &str,
    key: &str,
    value: &str,
    output: Option<&Path>,
) -> ExitCode {
    let mut doc = match open_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    if let Err(e) = doc.set_value(category, key, value) {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    save_document(&mut doc, output)
}

fn handle_add_category(file: &Path, category: &str, output: Option<&Path>) -> ExitCode {
    let mut doc = match open_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    if !doc.create_category(category) {
        log::info!("category [{category}] already exists");
        if output.is_none() {
            return ExitCode::SUCCESS;
        }
    }

    save_document(&mut doc, output)
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>, quiet: bool) -> Option<InidocToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            if !quiet {
                log::info!("using config: {}", p.display());
            }
            Some(config)
        }
        Err(e) => {
            log::warn!("failed to load {}: {}", p.display(), e);
            None
        }
    })
}
