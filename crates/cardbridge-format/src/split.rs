//! Chunk partitioning for large card collections.
//!
//! Chunks are contiguous slices of the input in order; nothing is
//! reordered or rebalanced, so the final chunk may be smaller than the
//! rest. Serialization of each chunk goes through the card writer at a
//! fixed version; archive assembly is the caller's concern.

use cardbridge_core::contact::ContactRecord;

use crate::vcard::{self, VCardVersion};

/// Version used for every split part.
const PART_VERSION: VCardVersion = VCardVersion::V3_0;

/// How to size the chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// At most this many contacts per chunk.
    ByCount(usize),
    /// This many chunks, filled by ceiling division.
    ByFiles(usize),
}

impl SplitPolicy {
    /// Resolves the policy into `(chunk size, chunk count)` for `total`
    /// contacts. A zero policy value is clamped to one.
    #[must_use]
    pub fn layout(self, total: usize) -> (usize, usize) {
        match self {
            Self::ByCount(value) => {
                let size = value.max(1);
                (size, total.div_ceil(size))
            }
            Self::ByFiles(value) => {
                let count = value.max(1);
                (total.div_ceil(count), count)
            }
        }
    }
}

/// One generated archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfPart {
    /// Deterministic member name, `contacts_part_<n>.vcf` with a 1-based
    /// index.
    pub file_name: String,
    /// Serialized cards for this chunk.
    pub content: String,
}

/// Slices `contacts` into contiguous chunks per `policy`.
///
/// An empty tail chunk ends partitioning early and is not emitted.
#[must_use]
pub fn partition(contacts: &[ContactRecord], policy: SplitPolicy) -> Vec<&[ContactRecord]> {
    let (size, count) = policy.layout(contacts.len());

    let mut chunks = Vec::with_capacity(count);
    for index in 0..count {
        let start = index * size;
        if start >= contacts.len() {
            break;
        }
        let end = (start + size).min(contacts.len());
        chunks.push(&contacts[start..end]);
    }
    chunks
}

/// Partitions and serializes, producing the ordered archive members.
#[must_use]
pub fn split_to_parts(contacts: &[ContactRecord], policy: SplitPolicy) -> Vec<VcfPart> {
    let parts: Vec<VcfPart> = partition(contacts, policy)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| VcfPart {
            file_name: format!("contacts_part_{}.vcf", index + 1),
            content: vcard::write_cards(chunk, PART_VERSION),
        })
        .collect();

    tracing::debug!(
        contacts = contacts.len(),
        parts = parts.len(),
        "Partitioned contacts"
    );
    parts
}
