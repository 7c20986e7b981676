//! Configuration file support for inidoc.
//!
//! This module provides:
//! - Loading configuration from `inidoc.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI args, config file, and defaults
//! - Template generation with `inidoc init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_config_file, find_file_upward, load_config, ConfigError};
pub use init::{generate_init_file, generate_init_file_in, INIDOC_TOML_TEMPLATE};
pub use merge::{merge_fmt_config, CliFmtOptions, FmtConfig};
pub use toml_schema::{FmtSection, InidocToml};
