//! Diffie-Hellman over the fixed 1024-bit MODP group.

pub mod context;
pub mod encoding;
pub mod engine;
pub mod group;
pub mod keygen;
pub mod validation;

pub use self::context::DhContext;
pub use self::engine::{BigIntEngine, DefaultEngine, NumBigint};
pub use self::group::GroupParameters;
pub use self::keygen::KeyPair;
pub use self::validation::{validate_public_key, SubgroupCheck};
