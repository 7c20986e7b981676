//! Template generation for `inidoc init`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Template inidoc.toml with documentation
pub const INIDOC_TOML_TEMPLATE: &str = r#"# inidoc.toml - Configuration for the inidoc INI tool
#
# `inidoc fmt` rewrites INI files into canonical form:
# - Comment and blank lines are dropped
# - Lines without `=` outside of category headers are dropped
# - Sections are separated by exactly one blank line
#
# The settings below control which files `fmt` picks up when
# walking directories - uncomment and modify as needed.

[fmt]
# File extensions to format (without the leading dot).
# Default: ["ini", "cfg"]
# extensions = ["ini", "cfg"]

# Also format hidden files and files inside hidden directories.
# Default: false
# hidden = false
"#;

/// Generate inidoc.toml in the specified directory (or current directory if None).
///
/// Returns an error if inidoc.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from("inidoc.toml"), |d| d.join("inidoc.toml"));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "inidoc.toml already exists",
        ));
    }

    fs::write(&path, INIDOC_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate inidoc.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
