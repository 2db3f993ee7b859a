//! The canonical contact record every converter reads from and writes to.

use serde::{Deserialize, Serialize};

/// The ten canonical contact fields, in catalog and column order.
///
/// Serialized names match the mapping-file keys (`firstName`, `lastName`,
/// and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Organization,
    JobTitle,
    MobilePhone,
    WorkPhone,
    Email,
    Website,
    Address,
    Note,
}

impl ContactField {
    /// All fields in canonical order.
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Organization,
        Self::JobTitle,
        Self::MobilePhone,
        Self::WorkPhone,
        Self::Email,
        Self::Website,
        Self::Address,
        Self::Note,
    ];

    /// The camel-case key used in mapping files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Organization => "organization",
            Self::JobTitle => "jobTitle",
            Self::MobilePhone => "mobilePhone",
            Self::WorkPhone => "workPhone",
            Self::Email => "email",
            Self::Website => "website",
            Self::Address => "address",
            Self::Note => "note",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single contact in normalized form.
///
/// `id` is a reader-local ordinal tag (`prefix-index`), unique only within
/// one parse result; it is never derived from content. Name components are
/// plain strings (empty when unknown); every other field is optional and
/// holds a non-empty value when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ContactRecord {
    /// Creates an empty record carrying only its ordinal id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Display name: given and family names joined, trimmed.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns the field value, or the empty string when unset.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Organization => self.organization.as_deref().unwrap_or(""),
            ContactField::JobTitle => self.job_title.as_deref().unwrap_or(""),
            ContactField::MobilePhone => self.mobile_phone.as_deref().unwrap_or(""),
            ContactField::WorkPhone => self.work_phone.as_deref().unwrap_or(""),
            ContactField::Email => self.email.as_deref().unwrap_or(""),
            ContactField::Website => self.website.as_deref().unwrap_or(""),
            ContactField::Address => self.address.as_deref().unwrap_or(""),
            ContactField::Note => self.note.as_deref().unwrap_or(""),
        }
    }

    /// Stores a field value. Empty input clears an optional field so that
    /// "present" always means "non-empty".
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            ContactField::FirstName => {
                self.first_name = value;
                return;
            }
            ContactField::LastName => {
                self.last_name = value;
                return;
            }
            ContactField::Organization => &mut self.organization,
            ContactField::JobTitle => &mut self.job_title,
            ContactField::MobilePhone => &mut self.mobile_phone,
            ContactField::WorkPhone => &mut self.work_phone,
            ContactField::Email => &mut self.email,
            ContactField::Website => &mut self.website,
            ContactField::Address => &mut self.address,
            ContactField::Note => &mut self.note,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
    }

    /// True when neither name component is set.
    #[must_use]
    pub fn has_no_name(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty()
    }
}
