use thiserror::Error;

/// Why a public value was refused by the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyRejection {
    /// `y < 2`
    BelowMinimum,
    /// `y > p - 2`
    AboveMaximum,
}

impl std::fmt::Display for PublicKeyRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicKeyRejection::BelowMinimum => f.write_str("DH public key must be at least 2"),
            PublicKeyRejection::AboveMaximum => f.write_str("DH public key must be at most p-2"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DhError {
    #[error("embedded group parameter '{0}' could not be parsed")]
    InvalidGroupParameter(&'static str),

    #[error("requested key length must be non-zero")]
    InvalidKeyLength,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(PublicKeyRejection),

    #[error("peer public key length {len} overflows a signed length")]
    PeerKeyTooLong { len: usize },

    #[error("peer public key bytes could not be parsed")]
    MalformedPeerKey,

    #[error("no key pair has been generated for this context")]
    KeyNotGenerated,

    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("no valid key pair after {attempts} attempts")]
    KeyGenerationExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, DhError>;
