//! In-memory building blocks of an INI document.

use std::fmt;

/// One line-level unit of a document: a category header or a `key=value` pair.
///
/// A category keeps its bare `name` for lookups and the `raw` header line,
/// which is what gets written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Category { name: String, raw: String },
    Pair { key: String, value: String },
}

impl Entry {
    /// New category whose header is rendered as `[name]`.
    pub fn category(name: impl Into<String>) -> Self {
        let name = name.into();
        Entry::Category {
            raw: format!("[{name}]"),
            name,
        }
    }

    /// Category parsed from a header line, kept verbatim for output.
    pub fn header(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Entry::Category {
            name: name.into(),
            raw: raw.into(),
        }
    }

    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::Pair {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Entry::Category { .. })
    }

    /// True if this entry is a category whose bare name equals `name`.
    pub fn is_category_named(&self, name: &str) -> bool {
        matches!(self, Entry::Category { name: n, .. } if n == name)
    }

    /// Borrowed view of a pair entry, `None` for categories.
    pub fn as_pair(&self) -> Option<Pair<'_>> {
        match self {
            Entry::Pair { key, value } => Some(Pair { key, value }),
            Entry::Category { .. } => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Category { raw, .. } => f.write_str(raw),
            Entry::Pair { key, value } => write!(f, "{key}={value}"),
        }
    }
}

/// A key/value pair borrowed from a document, as returned by lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_renders_with_brackets() {
        assert_eq!(Entry::category("Net").to_string(), "[Net]");
    }

    #[test]
    fn test_header_renders_raw_line() {
        let entry = Entry::header("Net", "[Net] ; main");
        assert_eq!(entry.to_string(), "[Net] ; main");
        assert!(entry.is_category_named("Net"));
    }

    #[test]
    fn test_pair_renders_key_equals_value() {
        assert_eq!(Entry::pair("url", "a=b").to_string(), "url=a=b");
    }

    #[test]
    fn test_as_pair_on_category_is_none() {
        assert!(Entry::category("Net").as_pair().is_none());
        let entry = Entry::pair("host", "localhost");
        let pair = entry.as_pair().unwrap();
        assert_eq!(pair.key, "host");
        assert_eq!(pair.value, "localhost");
    }

    #[test]
    fn test_is_category_named_ignores_pairs() {
        assert!(Entry::category("Net").is_category_named("Net"));
        assert!(!Entry::category("Net").is_category_named("net"));
        assert!(!Entry::pair("Net", "x").is_category_named("Net"));
    }
}
