//! TOML schema definitions for inidoc.toml

use serde::{Deserialize, Serialize};

/// Root structure for inidoc.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InidocToml {
    /// Settings for `inidoc fmt`
    #[serde(default)]
    pub fmt: FmtSection,
}

/// `[fmt]` section in inidoc.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FmtSection {
    /// File extensions picked up when walking directories (default: ini, cfg)
    pub extensions: Option<Vec<String>>,

    /// Also walk hidden files and directories (default: false)
    pub hidden: Option<bool>,
}
