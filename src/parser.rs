//! Line-oriented INI parser.
//!
//! Each line is classified on its own, in a single forward pass:
//! - empty lines and lines starting with `#` or `;` are dropped
//! - lines starting with `[` open a category named by the text up to the
//!   first `]`; the full line is kept and written back unchanged
//! - anything else must contain `=` and becomes a pair; otherwise it is dropped
//!
//! No whitespace is trimmed anywhere.

use log::debug;

use crate::entry::Entry;

const BOM: char = '\u{FEFF}';

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line or `#`/`;` comment
    Comment,
    Category(&'a str),
    Pair(&'a str, &'a str),
    /// Non-comment line without a `=` separator
    Malformed,
}

/// Classify one line without allocating.
pub fn classify_line(line: &str) -> LineKind<'_> {
    match line.chars().next() {
        None | Some('#') | Some(';') => LineKind::Comment,
        Some('[') => {
            let rest = &line[1..];
            LineKind::Category(rest.split_once(']').map_or(rest, |(name, _)| name))
        }
        Some(_) => match line.split_once('=') {
            Some((key, value)) => LineKind::Pair(key, value),
            None => LineKind::Malformed,
        },
    }
}

/// Drop a UTF-8 byte order mark at the start of the content.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

/// Build the ordered entry list from raw lines.
///
/// A byte order mark on the first line is ignored.
pub fn parse_lines<I, S>(lines: I) -> Vec<Entry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = vec![];

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line = if idx == 0 { strip_bom(line) } else { line };
        match classify_line(line) {
            LineKind::Comment => {}
            LineKind::Category(name) => entries.push(Entry::header(name, line)),
            LineKind::Pair(key, value) => entries.push(Entry::pair(key, value)),
            LineKind::Malformed => {
                debug!("dropping malformed line {}: {line:?}", idx + 1);
            }
        }
    }

    entries
}

/// Parse whole-file content; `\n` and `\r\n` line endings are both accepted.
pub fn parse_str(content: &str) -> Vec<Entry> {
    parse_lines(content.lines())
}
