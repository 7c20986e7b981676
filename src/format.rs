//! Canonical rewrite of INI text, as performed by `inidoc fmt`.

use crate::document::Document;
use crate::parser::{classify_line, strip_bom, LineKind};

/// Reformat INI content by parsing and re-serializing it.
///
/// Returns `None` when the content holds no entries at all, since an empty
/// document cannot be written.
pub fn format_content(content: &str) -> Option<FormatResult> {
    let doc = Document::parse(content);
    let formatted = doc.serialize().ok()?;

    let problems = strip_bom(content)
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let kind = match classify_line(line) {
                LineKind::Comment if !line.is_empty() => ProblemKind::Comment,
                LineKind::Malformed => ProblemKind::MalformedLine,
                _ => return None,
            };
            Some(Problem {
                line: idx + 1,
                kind,
            })
        })
        .collect();

    Some(FormatResult {
        original: content.to_string(),
        content: formatted,
        problems,
    })
}

#[derive(Debug, Clone)]
pub struct FormatResult {
    pub original: String,
    pub content: String,
    /// Lines that the rewrite drops
    pub problems: Vec<Problem>,
}

impl FormatResult {
    pub fn has_changes(&self) -> bool {
        self.original != self.content
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub line: usize,
    pub kind: ProblemKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProblemKind {
    /// `#` or `;` comment, not reconstructed on write
    Comment,
    /// Line that is neither a header nor contains `=`
    MalformedLine,
}
