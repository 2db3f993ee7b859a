//! Contact-format conversion core.
//!
//! Converts contact collections between a tabular (CSV-style) format and
//! vCard, and partitions large collections into bounded chunks. Every
//! operation is a pure function over in-memory text and records: callers
//! hand in a whole document as a string and get back records or generated
//! text. No I/O happens here.
//!
//! ## Reading
//!
//! ```rust
//! let input = "\
//! BEGIN:VCARD\n\
//! VERSION:3.0\n\
//! N:Doe;John;;;\n\
//! EMAIL;TYPE=INTERNET:john@example.com\n\
//! END:VCARD\n";
//!
//! let contacts = cardbridge_format::vcard::parse(input);
//! assert_eq!(contacts[0].first_name, "John");
//! assert_eq!(contacts[0].email.as_deref(), Some("john@example.com"));
//! ```
//!
//! ## Writing
//!
//! ```rust
//! use cardbridge_core::contact::ContactRecord;
//! use cardbridge_format::vcard::{self, VCardVersion};
//!
//! let mut contact = ContactRecord::new("c-0");
//! contact.first_name = "Jane".to_string();
//! contact.last_name = "Doe".to_string();
//!
//! let card = vcard::write_card(&contact, VCardVersion::V3_0);
//! assert!(card.contains("FN:Jane Doe"));
//! ```
//!
//! The high-level operations in [`convert`] wrap the readers and writers
//! with the empty-input and required-field gates used by the CLI.

pub mod convert;
pub mod mapping;
pub mod split;
pub mod tabular;
pub mod vcard;
