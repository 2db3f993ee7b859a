//! Tolerant vCard reader.
//!
//! The reader favors partial success over whole-document rejection:
//! unrecognized properties, parameter-less lines without a `:`, and missing
//! `END:VCARD` markers are all tolerated. A document with no `BEGIN:VCARD`
//! marker yields an empty vector, which callers report as "could not parse
//! contacts from this file".

mod lexer;

pub use lexer::{ContentLine, logical_lines, parse_content_line, split_cards, unescape_text};

use cardbridge_core::contact::{ContactField, ContactRecord};

/// Properties the reader understands. Anything else is skipped.
///
/// The mapping from wire names is the single dispatch table; adding a
/// property means adding a variant and one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Name,
    FormattedName,
    Org,
    Title,
    Email,
    Tel,
    Url,
    Note,
    Adr,
}

impl Property {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "N" => Some(Self::Name),
            "FN" => Some(Self::FormattedName),
            "ORG" => Some(Self::Org),
            "TITLE" => Some(Self::Title),
            "EMAIL" => Some(Self::Email),
            "TEL" => Some(Self::Tel),
            "URL" => Some(Self::Url),
            "NOTE" => Some(Self::Note),
            "ADR" => Some(Self::Adr),
            _ => None,
        }
    }
}

/// Accumulator for one card's properties.
///
/// Lives for a single card segment and is discarded once the record is
/// finalized; the TEL slotting rule reads the record built so far.
#[derive(Debug)]
struct CardBuilder {
    contact: ContactRecord,
}

impl CardBuilder {
    fn new(id: String) -> Self {
        Self {
            contact: ContactRecord::new(id),
        }
    }

    /// Applies one content line. Later occurrences of a single-valued
    /// property overwrite earlier ones; TEL has first/second-slot logic.
    fn apply(&mut self, line: &ContentLine) {
        let Some(property) = Property::from_name(&line.name) else {
            return;
        };
        let value = line.value.as_str();

        match property {
            // Family;Given;Middle;Prefix;Suffix - positions 0 and 1 only.
            Property::Name => {
                let mut parts = value.split(';');
                self.contact.last_name = parts.next().unwrap_or_default().to_string();
                self.contact.first_name = parts.next().unwrap_or_default().to_string();
            }
            // Fallback when no name has been seen: first token is the
            // given name, the remainder the family name.
            Property::FormattedName => {
                if self.contact.has_no_name() {
                    if let Some((first, rest)) = value.split_once(' ') {
                        self.contact.first_name = first.to_string();
                        self.contact.last_name = rest.to_string();
                    } else {
                        self.contact.first_name = value.to_string();
                    }
                }
            }
            Property::Org => {
                let name = value.split(';').next().unwrap_or_default();
                self.contact.set(ContactField::Organization, name);
            }
            Property::Title => self.contact.set(ContactField::JobTitle, value),
            Property::Email => self.contact.set(ContactField::Email, value),
            // First phone lands in the mobile slot regardless of TYPE; a
            // CELL parameter always claims the mobile slot; WORK fills the
            // second slot. Anything else is dropped.
            Property::Tel => {
                if line.has_param("CELL") || self.contact.mobile_phone.is_none() {
                    self.contact.set(ContactField::MobilePhone, value);
                } else if line.has_param("WORK") {
                    self.contact.set(ContactField::WorkPhone, value);
                }
            }
            Property::Url => self.contact.set(ContactField::Website, value),
            Property::Note => self.contact.set(ContactField::Note, value),
            // Seven positional components, flattened: structure is
            // intentionally discarded.
            Property::Adr => {
                let joined = value
                    .split(';')
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.contact.set(ContactField::Address, joined);
            }
        }
    }

    fn finish(self) -> ContactRecord {
        self.contact
    }
}

/// Parses a vCard document into contact records.
///
/// Each card is tagged with a reader-local ordinal id (`vcf-<index>`).
/// Returns an empty vector when no `BEGIN:VCARD` marker is present.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Vec<ContactRecord> {
    let mut contacts = Vec::new();

    for (index, segment) in split_cards(input).iter().enumerate() {
        if segment.trim().is_empty() {
            continue;
        }

        let mut builder = CardBuilder::new(format!("vcf-{index}"));
        for line in logical_lines(segment) {
            if let Some(content) = parse_content_line(&line) {
                builder.apply(&content);
            }
        }
        contacts.push(builder.finish());
    }

    tracing::debug!(count = contacts.len(), "Parsed vCard document");
    contacts
}
