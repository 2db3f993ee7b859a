//! Card segmentation, line unfolding, and content-line splitting.

/// Marker that opens every card block.
const BEGIN_MARKER: &str = "BEGIN:VCARD";

/// Splits a document into card segments on the case-insensitive
/// `BEGIN:VCARD` marker.
///
/// Text before the first marker is discarded. An `END:VCARD` marker is not
/// required; a truncated trailing card still yields a segment.
#[must_use]
pub fn split_cards(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let marker = BEGIN_MARKER.as_bytes();

    let mut starts = Vec::new();
    let mut i = 0;
    while i + marker.len() <= bytes.len() {
        if bytes[i..i + marker.len()].eq_ignore_ascii_case(marker) {
            starts.push(i);
            i += marker.len();
        } else {
            i += 1;
        }
    }

    // The marker is pure ASCII, so every boundary below is a char boundary.
    let mut segments = Vec::with_capacity(starts.len());
    for (n, &start) in starts.iter().enumerate() {
        let body_start = start + marker.len();
        let body_end = starts.get(n + 1).copied().unwrap_or(bytes.len());
        segments.push(&input[body_start..body_end]);
    }
    segments
}

/// Rebuilds logical lines from a card segment.
///
/// A physical line beginning with a space continues the previous logical
/// line: the continuation is trimmed and appended to the prior line's
/// buffered value. A continuation with no prior line stands alone.
#[must_use]
pub fn logical_lines(segment: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in segment.lines() {
        if line.starts_with(' ') {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(line.trim());
            } else {
                lines.push(line.to_string());
            }
        } else {
            lines.push(line.to_string());
        }
    }
    lines
}

/// One unfolded property line, split into name, parameter tokens, and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, uppercased.
    pub name: String,
    /// Raw parameter tokens as they appeared (e.g. `TYPE=CELL`).
    pub params: Vec<String>,
    /// Unescaped, trimmed value.
    pub value: String,
}

impl ContentLine {
    /// True when any parameter token contains `needle`, ignoring case.
    #[must_use]
    pub fn has_param(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_uppercase();
        self.params
            .iter()
            .any(|p| p.to_ascii_uppercase().contains(&needle))
    }
}

/// Splits a logical line at the first `:` outside of double quotes.
///
/// Lines with no separator yield `None` and are skipped by the reader. The
/// key part is split on `;` into the property name and its parameter
/// tokens; the value part is unescaped and trimmed.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let colon = find_value_separator(line)?;
    let (key_part, rest) = line.split_at(colon);
    let value = unescape_text(&rest[1..]).trim().to_string();

    let mut pieces = key_part.split(';');
    let name = pieces.next().unwrap_or_default().to_ascii_uppercase();
    let params = pieces.map(str::to_string).collect();

    Some(ContentLine {
        name,
        params,
        value,
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Unescapes text per the vCard escaping rules.
///
/// Handles `\n` (and `\N`) for newline, `\,`, `\;`, and `\\`. Unknown
/// escape sequences pass through unchanged.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cards_discards_preamble() {
        let input = "junk before\nBEGIN:VCARD\nFN:A\nEND:VCARD\n";
        let segments = split_cards(input);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].contains("FN:A"));
        assert!(!segments[0].contains("junk"));
    }

    #[test]
    fn split_cards_is_case_insensitive() {
        let input = "begin:vcard\nFN:A\nEND:VCARD\nBegin:Vcard\nFN:B\nEND:VCARD\n";
        assert_eq!(split_cards(input).len(), 2);
    }

    #[test]
    fn split_cards_without_marker_is_empty() {
        assert!(split_cards("no markers here").is_empty());
    }

    #[test]
    fn logical_lines_unfold_continuations() {
        let segment = "\nNOTE:first part\n second part\nFN:A\n";
        let lines = logical_lines(segment);
        assert!(lines.contains(&"NOTE:first partsecond part".to_string()));
        assert!(lines.contains(&"FN:A".to_string()));
    }

    #[test]
    fn logical_lines_keep_orphan_continuation() {
        let lines = logical_lines(" orphan");
        assert_eq!(lines, vec![" orphan".to_string()]);
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe").expect("parse line");
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_line_with_parameters() {
        let line = parse_content_line("TEL;TYPE=CELL;PREF=1:+1-555-0100").expect("parse line");
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params, vec!["TYPE=CELL", "PREF=1"]);
        assert_eq!(line.value, "+1-555-0100");
        assert!(line.has_param("cell"));
        assert!(!line.has_param("WORK"));
    }

    #[test]
    fn parse_keeps_colons_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path").expect("parse line");
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn parse_skips_line_without_colon() {
        assert_eq!(parse_content_line("no separator here"), None);
    }

    #[test]
    fn parse_lowercase_name_is_uppercased() {
        let line = parse_content_line("email:a@example.com").expect("parse line");
        assert_eq!(line.name, "EMAIL");
    }

    #[test]
    fn unescape_handles_all_sequences() {
        assert_eq!(unescape_text("a\\;b\\,c\\nd\\\\e"), "a;b,c\nd\\e");
    }

    #[test]
    fn unescape_passes_unknown_sequences_through() {
        assert_eq!(unescape_text("a\\x"), "a\\x");
    }
}
