//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-eme` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Raised while producing an encoded message.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Raised while removing an encoding.
    ///
    /// Carries no detail about which check failed. Callers must treat every
    /// decoding error the same way.
    #[error("decoding error")]
    Decoding,
}

/// Reasons an encoding operation can fail.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum EncodingError {
    /// Message too long for the key size and encoding method.
    #[error("message too long")]
    MessageTooLong,

    /// Label exceeds the input limit of the hash function.
    #[error("label too long")]
    LabelTooLong,

    /// Integer does not fit into four octets.
    #[error("integer too large")]
    IntegerTooLarge,

    /// Octet strings of different lengths were combined.
    #[error("invalid octet string lengths")]
    LengthMismatch,

    /// Requested mask is longer than MGF1 can produce.
    #[error("mask too long")]
    MaskTooLong,
}

impl Error {
    /// Returns `true` if this error was raised by an encoding operation.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Returns `true` if this error was raised by a decoding operation.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::Decoding)
    }
}
