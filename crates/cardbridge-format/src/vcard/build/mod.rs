//! Deterministic vCard writer.
//!
//! Emission order is fixed and a property line appears only when its
//! source value is non-empty. The target version changes nothing but the
//! `VERSION:` line.

use cardbridge_core::contact::ContactRecord;

use super::version::VCardVersion;

/// Escapes a free-text value for embedding in a property line.
///
/// Backslash must be replaced first so the later substitutions are not
/// double-escaped.
#[must_use]
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Serializes one contact as a single card, trailing newline included.
///
/// `FN` carries the unescaped display form; phone, email, and URL values
/// are passed through verbatim.
#[must_use]
pub fn write_card(contact: &ContactRecord, version: VCardVersion) -> String {
    let mut out = String::new();

    out.push_str("BEGIN:VCARD\n");
    out.push_str(&format!("VERSION:{version}\n"));
    out.push_str(&format!(
        "N:{};{};;;\n",
        escape_text(&contact.last_name),
        escape_text(&contact.first_name)
    ));
    out.push_str(&format!("FN:{}\n", contact.display_name()));

    if let Some(organization) = &contact.organization {
        out.push_str(&format!("ORG:{}\n", escape_text(organization)));
    }
    if let Some(title) = &contact.job_title {
        out.push_str(&format!("TITLE:{}\n", escape_text(title)));
    }
    if let Some(mobile) = &contact.mobile_phone {
        out.push_str(&format!("TEL;TYPE=CELL:{mobile}\n"));
    }
    if let Some(work) = &contact.work_phone {
        out.push_str(&format!("TEL;TYPE=WORK:{work}\n"));
    }
    if let Some(email) = &contact.email {
        out.push_str(&format!("EMAIL;TYPE=INTERNET:{email}\n"));
    }
    if let Some(website) = &contact.website {
        out.push_str(&format!("URL:{website}\n"));
    }
    if let Some(address) = &contact.address {
        out.push_str(&format!("ADR;TYPE=HOME:;;{};;;;\n", escape_text(address)));
    }
    if let Some(note) = &contact.note {
        out.push_str(&format!("NOTE:{}\n", escape_text(note)));
    }

    out.push_str("END:VCARD\n");
    out
}

/// Serializes a batch, separating cards with one blank line.
#[must_use]
pub fn write_cards(contacts: &[ContactRecord], version: VCardVersion) -> String {
    contacts
        .iter()
        .map(|contact| write_card(contact, version))
        .collect::<Vec<_>>()
        .join("\n")
}
