use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FmtConfig;

/// Walk paths and yield INI file paths, respecting gitignore.
///
/// Files named directly are always yielded; files found inside directories
/// must match one of the configured extensions.
pub fn walk_paths(
    paths: &[String],
    config: &FmtConfig,
) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut all_files = vec![];

    for path in paths {
        if Path::new(path).is_file() {
            all_files.push(Ok(PathBuf::from(path)));
            continue;
        }

        let walker = WalkBuilder::new(path)
            .hidden(!config.hidden)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
                    if is_file && has_ini_extension(entry.path(), config) {
                        all_files.push(Ok(entry.into_path()));
                    }
                }
                Err(e) => {
                    all_files.push(Err(io::Error::other(e.to_string())));
                }
            }
        }
    }

    all_files.into_iter()
}

fn has_ini_extension(path: &Path, config: &FmtConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.matches_extension(ext))
}
