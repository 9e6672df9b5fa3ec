//! Big-integer backends.
//!
//! The rest of the crate talks to arbitrary-precision arithmetic only through
//! [`BigIntEngine`]. A backend is a zero-sized marker type; its integers are
//! plain owned values, so temporaries are released when they go out of scope.

mod num_bigint_engine;
pub use num_bigint_engine::NumBigint;

#[cfg(feature = "crypto-bigint")]
mod crypto_bigint_engine;
#[cfg(feature = "crypto-bigint")]
pub use crypto_bigint_engine::CryptoBigint;

use once_cell::sync::OnceCell;
use std::fmt::Debug;

use crate::crypto::group::GroupParameters;

/// Backend picked at build time.
#[cfg(feature = "crypto-bigint")]
pub type DefaultEngine = CryptoBigint;
#[cfg(not(feature = "crypto-bigint"))]
pub type DefaultEngine = NumBigint;

/// Arithmetic needed by the key agreement.
pub trait BigIntEngine: Sized + 'static {
    type Int: Clone + Ord + Debug + Send + Sync;

    /// Short name used in log lines.
    const NAME: &'static str;

    fn from_word(word: u64) -> Self::Int;

    /// `x - word`. Callers only subtract from values at least `word`.
    fn sub_word(x: &Self::Int, word: u64) -> Self::Int;

    /// Parses an unsigned hexadecimal string.
    fn parse_hex(hex: &str) -> Option<Self::Int>;

    /// Parses an unsigned big-endian byte string.
    fn from_be_bytes(bytes: &[u8]) -> Option<Self::Int>;

    /// Length of the minimal big-endian encoding. Zero encodes to zero bytes.
    fn byte_len(x: &Self::Int) -> usize;

    /// Writes the minimal big-endian encoding. `out.len()` must equal `byte_len(x)`.
    fn write_be_bytes(x: &Self::Int, out: &mut [u8]);

    /// `base ^ exponent mod modulus` for an odd modulus.
    fn mod_exp(base: &Self::Int, exponent: &Self::Int, modulus: &Self::Int) -> Self::Int;

    /// Storage for this backend's process-wide group parameters.
    fn group_cache() -> &'static OnceCell<GroupParameters<Self>>;

    fn is_one(x: &Self::Int) -> bool {
        *x == Self::from_word(1)
    }
}
