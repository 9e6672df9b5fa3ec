//! Diffie-Hellman key agreement for the handshake layer.
//!
//! ```no_run
//! use handshake_dh::DhContext;
//!
//! let mut alice: DhContext = DhContext::new(1024)?;
//! let mut bob: DhContext = DhContext::new(1024)?;
//! alice.generate_key_pair()?;
//! bob.generate_key_pair()?;
//!
//! let a_pub = alice.public_key_vec()?;
//! let b_pub = bob.public_key_vec()?;
//! assert_eq!(alice.shared_secret_vec(&b_pub)?, bob.shared_secret_vec(&a_pub)?);
//! # Ok::<(), handshake_dh::DhError>(())
//! ```
//!
//! Exponentiation is not constant-time with the default backend.

pub mod config;
pub mod crypto;
pub mod error;

pub use config::DhConfig;
pub use crypto::{
    validate_public_key, BigIntEngine, DefaultEngine, DhContext, GroupParameters, KeyPair,
    NumBigint, SubgroupCheck,
};
#[cfg(feature = "crypto-bigint")]
pub use crypto::engine::CryptoBigint;
pub use error::{DhError, PublicKeyRejection, Result};
