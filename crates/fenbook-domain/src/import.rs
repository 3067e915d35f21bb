//! Bulk import line grammar.
//!
//! One entry per line: `<fen>` or `<fen> // <description>`. Blank lines are
//! discarded. Only the first occurrence of the delimiter separates the two
//! segments; later occurrences stay verbatim in the description.

/// Literal separator between the board encoding and its caption.
pub const IMPORT_DELIMITER: &str = " // ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub fen: String,
    pub description: String,
}

/// Parse pasted text into ordered entries. Pure; malformed FEN is not a
/// parse failure here, syntax checking happens per record afterwards.
pub fn parse_import(text: &str) -> Vec<ParsedEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(IMPORT_DELIMITER) {
            Some((fen, description)) => ParsedEntry {
                fen: fen.trim().to_string(),
                description: description.to_string(),
            },
            None => ParsedEntry {
                fen: line.trim().to_string(),
                description: String::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_delimiter_has_empty_description() {
        let entries = parse_import("X");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fen, "X");
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_splits_on_first_delimiter_only() {
        let entries = parse_import("X // Y // Z");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fen, "X");
        assert_eq!(entries[0].description, "Y // Z");
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        let entries = parse_import("a\n\n   \nb\n\t\nc\n");
        let fens: Vec<_> = entries.iter().map(|e| e.fen.as_str()).collect();
        assert_eq!(fens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fen_segment_is_trimmed() {
        let entries = parse_import("  8/8/8/8/8/8/8/8 w - - 0 1   // caption");
        assert_eq!(entries[0].fen, "8/8/8/8/8/8/8/8 w - - 0 1");
        assert_eq!(entries[0].description, "caption");
    }

    #[test]
    fn test_entries_keep_input_line_order() {
        let entries = parse_import("one // 1\ntwo\nthree // 3");
        let fens: Vec<_> = entries.iter().map(|e| e.fen.as_str()).collect();
        assert_eq!(fens, vec!["one", "two", "three"]);
        assert_eq!(entries[2].description, "3");
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        assert!(parse_import("").is_empty());
        assert!(parse_import("\n\n").is_empty());
    }
}
