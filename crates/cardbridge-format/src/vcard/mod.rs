//! vCard reading and writing.
//!
//! ## Overview
//!
//! The reader is deliberately forgiving: it splits a document on the
//! case-insensitive `BEGIN:VCARD` marker, unfolds continuation lines, and
//! understands a fixed subset of common properties. Anything it does not
//! recognize is skipped rather than failing the document, so a truncated or
//! slightly malformed export still yields the contacts it contains.
//!
//! The writer is deterministic: fixed property order, one escaping rule,
//! `\n` line endings. It emits the same property set for every target
//! version; only the `VERSION:` line changes.
//!
//! ## Submodules
//!
//! - [`parse`] - Tolerant reader producing [`ContactRecord`]s
//! - [`build`] - Deterministic writer
//!
//! [`ContactRecord`]: cardbridge_core::contact::ContactRecord

pub mod build;
pub mod parse;
mod version;

#[cfg(test)]
mod tests;

pub use build::{escape_text, write_card, write_cards};
pub use parse::parse;
pub use version::VCardVersion;
