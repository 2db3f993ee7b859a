//! Fixed catalog of mappable fields.
//!
//! The catalog drives the auto-mapping heuristic and supplies the tabular
//! header row; it is pure configuration. `firstName` is the only required
//! field.

use crate::contact::ContactField;

/// One catalog entry: a mappable field plus its presentation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: ContactField,
    /// Human label; also the column header emitted by the tabular writer.
    pub label: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// The supported fields, in canonical order.
pub const SUPPORTED_FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        field: ContactField::FirstName,
        label: "First Name",
        required: true,
        description: "Given Name",
    },
    FieldSpec {
        field: ContactField::LastName,
        label: "Last Name",
        required: false,
        description: "Family Name",
    },
    FieldSpec {
        field: ContactField::Organization,
        label: "Organization",
        required: false,
        description: "Company",
    },
    FieldSpec {
        field: ContactField::JobTitle,
        label: "Job Title",
        required: false,
        description: "Role / Position",
    },
    FieldSpec {
        field: ContactField::MobilePhone,
        label: "Mobile Phone",
        required: false,
        description: "Cell",
    },
    FieldSpec {
        field: ContactField::WorkPhone,
        label: "Work Phone",
        required: false,
        description: "Office",
    },
    FieldSpec {
        field: ContactField::Email,
        label: "Email",
        required: false,
        description: "Email Address",
    },
    FieldSpec {
        field: ContactField::Website,
        label: "Website",
        required: false,
        description: "URL",
    },
    FieldSpec {
        field: ContactField::Address,
        label: "Address",
        required: false,
        description: "Full Address",
    },
    FieldSpec {
        field: ContactField::Note,
        label: "Notes",
        required: false,
        description: "Remarks",
    },
];
