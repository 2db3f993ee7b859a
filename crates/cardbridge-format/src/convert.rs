//! High-level conversion operations, one per user-facing flow.
//!
//! These wrap the readers and writers with the two gates every caller
//! needs: the empty-input check (a reader returning zero records halts the
//! pipeline with a user-facing message) and the required-field check on
//! mapping confirmation. Everything below this module is infallible.

use cardbridge_core::contact::ContactRecord;
use cardbridge_core::error::{BridgeError, BridgeResult};

use crate::mapping::{self, ColumnMapping};
use crate::split::{self, SplitPolicy, VcfPart};
use crate::tabular;
use crate::vcard::{self, VCardVersion};

/// Message when a tabular document yields no rows.
const EMPTY_TABULAR: &str = "file appears empty or invalid";
/// Message when a vCard document yields no cards.
const EMPTY_VCARD: &str = "could not parse contacts from this file";

/// Converts tabular text to a vCard document.
///
/// With no explicit mapping the auto-mapping heuristic runs against the
/// parsed header row.
///
/// ## Errors
/// [`BridgeError::EmptyInput`] when no rows parse;
/// [`BridgeError::MissingRequiredField`] when the mapping (given or
/// derived) leaves a required field unassigned.
pub fn tabular_to_vcard(
    input: &str,
    mapping: Option<&ColumnMapping>,
    version: VCardVersion,
) -> BridgeResult<String> {
    let doc = tabular::parse(input);
    if doc.is_empty() {
        return Err(BridgeError::EmptyInput(EMPTY_TABULAR));
    }

    let derived;
    let mapping = if let Some(given) = mapping {
        given
    } else {
        derived = mapping::auto_map(doc.headers());
        &derived
    };
    mapping::validate(mapping)?;

    let contacts = mapping::apply(&doc, mapping);
    tracing::info!(contacts = contacts.len(), %version, "Converted tabular input to cards");
    Ok(vcard::write_cards(&contacts, version))
}

/// Converts vCard text to a tabular document.
///
/// ## Errors
/// [`BridgeError::EmptyInput`] when no cards parse.
pub fn vcard_to_tabular(input: &str) -> BridgeResult<String> {
    let contacts = parse_cards(input)?;
    tracing::info!(contacts = contacts.len(), "Converted cards to tabular output");
    Ok(tabular::write(&contacts))
}

/// Partitions vCard text into named archive members.
///
/// ## Errors
/// [`BridgeError::EmptyInput`] when no cards parse.
pub fn split_vcard(input: &str, policy: SplitPolicy) -> BridgeResult<Vec<VcfPart>> {
    let contacts = parse_cards(input)?;
    Ok(split::split_to_parts(&contacts, policy))
}

/// Reads cards and applies the empty-result gate.
///
/// ## Errors
/// [`BridgeError::EmptyInput`] when the document yields no cards.
pub fn parse_cards(input: &str) -> BridgeResult<Vec<ContactRecord>> {
    let contacts = vcard::parse(input);
    if contacts.is_empty() {
        return Err(BridgeError::EmptyInput(EMPTY_VCARD));
    }
    Ok(contacts)
}
