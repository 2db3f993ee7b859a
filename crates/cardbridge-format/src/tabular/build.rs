//! Deterministic tabular writer.

use cardbridge_core::catalog::SUPPORTED_FIELDS;
use cardbridge_core::contact::ContactRecord;

/// Byte-order mark emitted so spreadsheet tools detect UTF-8.
const BOM: char = '\u{feff}';

/// Serializes contacts as delimited text.
///
/// Output is the BOM, the fixed catalog header row, then one row per
/// contact in input order. Absent values emit as empty cells.
#[must_use]
pub fn write(contacts: &[ContactRecord]) -> String {
    let mut out = String::new();
    out.push(BOM);

    let headers: Vec<&str> = SUPPORTED_FIELDS.iter().map(|spec| spec.label).collect();
    out.push_str(&headers.join(","));
    out.push('\n');

    let rows: Vec<String> = contacts
        .iter()
        .map(|contact| {
            SUPPORTED_FIELDS
                .iter()
                .map(|spec| quote_cell(contact.get(spec.field)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    out.push_str(&rows.join("\n"));

    out
}

/// Quotes a cell only when it contains a quote, comma, or newline;
/// internal quotes are doubled.
fn quote_cell(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
