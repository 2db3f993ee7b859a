//! Column-to-field mapping.
//!
//! The auto-mapping heuristic is a best-effort convenience: for each
//! catalog field in order, the first header whose lowercased text contains
//! the field key or label wins. Collisions are possible and resolved by
//! catalog order; nothing prevents a later field from claiming the same
//! header.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cardbridge_core::catalog::SUPPORTED_FIELDS;
use cardbridge_core::contact::{ContactField, ContactRecord};
use cardbridge_core::error::{BridgeError, BridgeResult};

use crate::tabular::TabularDocument;

/// Name substituted when a row supplies neither name component.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Assignment of tabular headers to contact fields.
///
/// A field absent from the map is unmapped. Later writes to the same field
/// win. Serializes as a flat JSON object keyed by field name, e.g.
/// `{"firstName": "First Name"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<ContactField, String>,
}

impl ColumnMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `field` to `header`, replacing any previous assignment.
    pub fn assign(&mut self, field: ContactField, header: impl Into<String>) {
        self.entries.insert(field, header.into());
    }

    /// The header mapped to `field`, if any.
    #[must_use]
    pub fn header(&self, field: ContactField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Identity mapping: every catalog field to its own label, the header
    /// row the tabular writer emits.
    #[must_use]
    pub fn identity() -> Self {
        let mut mapping = Self::new();
        for spec in &SUPPORTED_FIELDS {
            mapping.assign(spec.field, spec.label);
        }
        mapping
    }
}

/// Best-effort automatic mapping over `headers`.
#[must_use]
pub fn auto_map(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for spec in &SUPPORTED_FIELDS {
        let key = spec.field.key().to_lowercase();
        let label = spec.label.to_lowercase();
        let matched = headers.iter().find(|header| {
            let header = header.to_lowercase();
            header.contains(&key) || header.contains(&label)
        });
        if let Some(header) = matched {
            mapping.assign(spec.field, header.clone());
        }
    }
    mapping
}

/// Rejects a mapping that leaves a required field unassigned.
///
/// This is a validation gate applied before record construction, not a
/// post-hoc error.
///
/// ## Errors
/// [`BridgeError::MissingRequiredField`] naming the first unassigned
/// required field.
pub fn validate(mapping: &ColumnMapping) -> BridgeResult<()> {
    for spec in SUPPORTED_FIELDS.iter().filter(|spec| spec.required) {
        if mapping.header(spec.field).is_none() {
            return Err(BridgeError::MissingRequiredField(spec.field.key()));
        }
    }
    Ok(())
}

/// Materializes contacts from a parsed document using `mapping`.
///
/// Ids are dense row ordinals (`c-0`, `c-1`, ...). Unmapped fields stay
/// empty; a row lacking the mapped header contributes an empty string; a
/// row with no name in either mapped name column gets the
/// [`PLACEHOLDER_NAME`] back-fill.
#[must_use]
pub fn apply(doc: &TabularDocument, mapping: &ColumnMapping) -> Vec<ContactRecord> {
    (0..doc.len())
        .map(|row| {
            let mut contact = ContactRecord::new(format!("c-{row}"));
            for spec in &SUPPORTED_FIELDS {
                if let Some(header) = mapping.header(spec.field) {
                    let value = doc.cell(row, header).unwrap_or_default();
                    contact.set(spec.field, value);
                }
            }
            if contact.has_no_name() {
                contact.first_name = PLACEHOLDER_NAME.to_string();
            }
            contact
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn auto_map_matches_exact_labels() {
        let mapping = auto_map(&headers(&["First Name", "Last Name", "Mobile Phone"]));

        assert_eq!(mapping.header(ContactField::FirstName), Some("First Name"));
        assert_eq!(mapping.header(ContactField::LastName), Some("Last Name"));
        assert_eq!(
            mapping.header(ContactField::MobilePhone),
            Some("Mobile Phone")
        );
        for field in [
            ContactField::Organization,
            ContactField::JobTitle,
            ContactField::WorkPhone,
            ContactField::Email,
            ContactField::Website,
            ContactField::Address,
            ContactField::Note,
        ] {
            assert_eq!(mapping.header(field), None);
        }
    }

    #[test]
    fn auto_map_is_case_insensitive_substring() {
        let mapping = auto_map(&headers(&["the EMAIL column", "workphone"]));
        assert_eq!(
            mapping.header(ContactField::Email),
            Some("the EMAIL column")
        );
        assert_eq!(mapping.header(ContactField::WorkPhone), Some("workphone"));
    }

    #[test]
    fn auto_map_first_match_wins() {
        let mapping = auto_map(&headers(&["Email (home)", "Email (work)"]));
        assert_eq!(mapping.header(ContactField::Email), Some("Email (home)"));
    }

    #[test]
    fn validate_requires_first_name() {
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::Email, "Email");
        let err = validate(&mapping).expect_err("validation must fail");
        assert!(matches!(
            err,
            BridgeError::MissingRequiredField("firstName")
        ));

        mapping.assign(ContactField::FirstName, "First Name");
        assert!(validate(&mapping).is_ok());
    }

    #[test]
    fn apply_copies_mapped_cells_and_assigns_dense_ids() {
        let doc = tabular::parse("Given,Mail\nAda,ada@example.com\nGrace,\n");
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::FirstName, "Given");
        mapping.assign(ContactField::Email, "Mail");

        let contacts = apply(&doc, &mapping);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, "c-0");
        assert_eq!(contacts[0].first_name, "Ada");
        assert_eq!(contacts[0].email.as_deref(), Some("ada@example.com"));
        assert_eq!(contacts[1].id, "c-1");
        assert_eq!(contacts[1].email, None);
    }

    #[test]
    fn apply_backfills_placeholder_name() {
        let doc = tabular::parse("Given,Mail\n,someone@example.com\n");
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::FirstName, "Given");
        mapping.assign(ContactField::Email, "Mail");

        let contacts = apply(&doc, &mapping);
        assert_eq!(contacts[0].first_name, PLACEHOLDER_NAME);
        assert_eq!(contacts[0].last_name, "");
    }

    #[test]
    fn apply_tolerates_mapping_to_missing_header() {
        let doc = tabular::parse("Given\nAda\n");
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::FirstName, "Given");
        mapping.assign(ContactField::Note, "No Such Column");

        let contacts = apply(&doc, &mapping);
        assert_eq!(contacts[0].note, None);
    }

    #[test]
    fn assign_last_write_wins() {
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::Note, "A");
        mapping.assign(ContactField::Note, "B");
        assert_eq!(mapping.header(ContactField::Note), Some("B"));
    }

    #[test]
    fn mapping_serializes_with_field_keys() {
        let mut mapping = ColumnMapping::new();
        mapping.assign(ContactField::FirstName, "Given Name");
        mapping.assign(ContactField::MobilePhone, "Cell");

        let json = serde_json::to_string(&mapping).expect("serialize mapping");
        assert!(json.contains("\"firstName\":\"Given Name\""));
        assert!(json.contains("\"mobilePhone\":\"Cell\""));

        let parsed: ColumnMapping = serde_json::from_str(&json).expect("parse mapping");
        assert_eq!(parsed, mapping);
    }

    #[test]
    fn identity_maps_every_field_to_its_label() {
        let mapping = ColumnMapping::identity();
        assert!(validate(&mapping).is_ok());
        assert_eq!(mapping.header(ContactField::Note), Some("Notes"));
    }
}
