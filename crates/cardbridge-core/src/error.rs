use thiserror::Error;

/// Errors surfaced at the conversion boundary.
///
/// The readers themselves never fail: unparseable fragments are dropped and
/// a document that yields zero records is reported by the caller as
/// [`BridgeError::EmptyInput`]. Partial success always wins over
/// whole-document rejection.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A reader produced zero records from the input. The payload is the
    /// user-facing message for the failed step.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// A mapping was confirmed without a required field assigned.
    #[error("required field '{0}' is not mapped")]
    MissingRequiredField(&'static str),

    /// A version token other than 2.1, 3.0, or 4.0.
    #[error("unsupported vCard version: {0}")]
    UnsupportedVersion(String),

    /// Settings could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
