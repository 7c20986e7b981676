//! Serializer: entries back to INI text.
//!
//! Sections are separated by exactly one blank line regardless of the
//! original spacing; comments are never reconstructed.

use std::io::Write;

use crate::entry::Entry;
use crate::error::SaveError;

/// Render entries as lines. Fails on an empty entry list.
pub fn to_lines(entries: &[Entry]) -> Result<Vec<String>, SaveError> {
    let (first, rest) = entries.split_first().ok_or(SaveError::EmptyDocument)?;

    let mut lines = Vec::with_capacity(entries.len() * 2);
    lines.push(first.to_string());

    for entry in rest {
        if entry.is_category() {
            lines.push(String::new());
        }
        lines.push(entry.to_string());
    }

    Ok(lines)
}

/// Render entries as one string, each line terminated by `\n`.
pub fn serialize(entries: &[Entry]) -> Result<String, SaveError> {
    let lines = to_lines(entries)?;
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Write entries to any sink in one pass.
pub fn write_entries<W: Write>(entries: &[Entry], sink: &mut W) -> Result<(), SaveError> {
    let content = serialize(entries)?;
    sink.write_all(content.as_bytes())?;
    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entries_rejected() {
        assert!(matches!(to_lines(&[]), Err(SaveError::EmptyDocument)));
    }

    #[test]
    fn test_blank_line_before_each_later_category() {
        let entries = vec![
            Entry::category("Net"),
            Entry::pair("host", "localhost"),
            Entry::category("Log"),
            Entry::pair("level", "debug"),
        ];
        assert_eq!(
            to_lines(&entries).unwrap(),
            vec!["[Net]", "host=localhost", "", "[Log]", "level=debug"]
        );
    }

    #[test]
    fn test_adjacent_categories_each_get_one_blank_line() {
        let entries = vec![Entry::category("A"), Entry::category("B"), Entry::category("C")];
        assert_eq!(to_lines(&entries).unwrap(), vec!["[A]", "", "[B]", "", "[C]"]);
    }

    #[test]
    fn test_leading_pair_written_with_value() {
        let entries = vec![Entry::pair("stray", "1"), Entry::category("A")];
        assert_eq!(to_lines(&entries).unwrap(), vec!["stray=1", "", "[A]"]);
    }

    #[test]
    fn test_serialize_terminates_every_line() {
        let entries = vec![Entry::category("A"), Entry::pair("k", "v")];
        assert_eq!(serialize(&entries).unwrap(), "[A]\nk=v\n");
    }

    #[test]
    fn test_write_entries_to_buffer() {
        let entries = vec![Entry::category("A")];
        let mut buf = Vec::new();
        write_entries(&entries, &mut buf).unwrap();
        assert_eq!(buf, b"[A]\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failing_sink_reports_write_error() {
        let entries = vec![Entry::category("A")];
        let result = write_entries(&entries, &mut BrokenSink);
        assert!(matches!(result, Err(SaveError::Write(_))));
    }
}
