//! Tolerant reader for comma-delimited contact exports.

/// UTF-8 byte-order mark; tolerated at the start of input, never required.
const BOM: char = '\u{feff}';

/// An ordered tabular document: one header row plus data rows.
///
/// Header order is column order. Every row is padded or truncated to the
/// header width, so cell lookups never go out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularDocument {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularDocument {
    /// Column headers in document order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the document holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell by row index and header name.
    #[must_use]
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Parses delimited text into a document.
///
/// The first line is the header row; header cells are trimmed and have one
/// outer quote pair stripped. Blank lines are skipped. Rows shorter than
/// the header are padded with empty strings; longer rows are silently
/// truncated. An empty document yields no rows; callers treat that as
/// "file appears empty or invalid".
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> TabularDocument {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    let mut lines = input.lines();

    let Some(header_line) = lines.next() else {
        return TabularDocument::default();
    };
    let headers: Vec<String> = header_line
        .split(',')
        .map(|header| strip_outer_quotes(header.trim()).to_string())
        .collect();

    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut values: Vec<String> = scan_fields(line)
            .into_iter()
            .map(|raw| unquote_field(&raw))
            .collect();
        values.resize(headers.len(), String::new());
        rows.push(values);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "Parsed tabular document"
    );
    TabularDocument { headers, rows }
}

/// Single-pass field scanner.
///
/// A `"` toggles the quoted flag; `,` splits only while the flag is off.
/// Quote characters stay in the raw field and are dealt with by
/// [`unquote_field`] afterward.
fn scan_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quote = !in_quote;
                current.push(c);
            }
            ',' if !in_quote => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Strips one leading and one trailing quote, then collapses doubled
/// quotes.
fn unquote_field(raw: &str) -> String {
    strip_outer_quotes(raw).replace("\"\"", "\"")
}

fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_rows() {
        let doc = parse("Name,Email\nAda,ada@example.com\nGrace,grace@example.com\n");
        assert_eq!(doc.headers(), ["Name", "Email"]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.cell(0, "Name"), Some("Ada"));
        assert_eq!(doc.cell(1, "Email"), Some("grace@example.com"));
    }

    #[test]
    fn header_cells_are_trimmed_and_unquoted() {
        let doc = parse("\"First Name\" , Last Name \nAda,Lovelace\n");
        assert_eq!(doc.headers(), ["First Name", "Last Name"]);
    }

    #[test]
    fn quoted_field_keeps_comma() {
        let doc = parse("Name,Address\nAda,\"12 Crescent, London\"\n");
        assert_eq!(doc.cell(0, "Address"), Some("12 Crescent, London"));
    }

    #[test]
    fn doubled_quotes_collapse() {
        let doc = parse("Name,Quote\nAda,\"She said \"\"hi\"\"\"\n");
        assert_eq!(doc.cell(0, "Quote"), Some("She said \"hi\""));
    }

    #[test]
    fn short_rows_pad_with_empty_strings() {
        let doc = parse("A,B,C\n1\n");
        assert_eq!(doc.cell(0, "A"), Some("1"));
        assert_eq!(doc.cell(0, "B"), Some(""));
        assert_eq!(doc.cell(0, "C"), Some(""));
    }

    #[test]
    fn extra_tokens_are_dropped() {
        let doc = parse("A,B\n1,2,3,4\n");
        assert_eq!(doc.rows()[0], ["1", "2"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let doc = parse("A,B\n1,2\n\n   \n3,4\n");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let doc = parse("A,B\r\n1,2\r\n");
        assert_eq!(doc.cell(0, "B"), Some("2"));
    }

    #[test]
    fn leading_bom_is_stripped() {
        let doc = parse("\u{feff}A,B\n1,2\n");
        assert_eq!(doc.headers(), ["A", "B"]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        assert!(parse("A,B\n").is_empty());
    }

    #[test]
    fn unknown_header_lookup_is_none() {
        let doc = parse("A\n1\n");
        assert_eq!(doc.cell(0, "missing"), None);
    }
}
