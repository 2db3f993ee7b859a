//! Target wire versions for generated cards.

use std::fmt;
use std::str::FromStr;

use cardbridge_core::error::BridgeError;

/// vCard wire version emitted on the `VERSION:` line.
///
/// The writer emits the same property set for every version; stricter
/// per-version property gating is intentionally not performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VCardVersion {
    /// Legacy 2.1.
    V2_1,
    /// 3.0, the common interchange default.
    #[default]
    V3_0,
    /// 4.0 (RFC 6350).
    V4_0,
}

impl VCardVersion {
    /// The literal token written after `VERSION:`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.1" => Ok(Self::V2_1),
            "3.0" => Ok(Self::V3_0),
            "4.0" => Ok(Self::V4_0),
            other => Err(BridgeError::UnsupportedVersion(other.to_string())),
        }
    }
}
