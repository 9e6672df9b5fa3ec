use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::OnceCell;

use super::BigIntEngine;
use crate::crypto::group::GroupParameters;

/// Arbitrary-width backend on top of `num_bigint::BigUint`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumBigint;

impl BigIntEngine for NumBigint {
    type Int = BigUint;

    const NAME: &'static str = "num-bigint";

    fn from_word(word: u64) -> BigUint {
        BigUint::from(word)
    }

    fn sub_word(x: &BigUint, word: u64) -> BigUint {
        x - word
    }

    fn parse_hex(hex: &str) -> Option<BigUint> {
        BigUint::parse_bytes(hex.as_bytes(), 16)
    }

    fn from_be_bytes(bytes: &[u8]) -> Option<BigUint> {
        Some(BigUint::from_bytes_be(bytes))
    }

    fn byte_len(x: &BigUint) -> usize {
        x.bits().div_ceil(8) as usize
    }

    fn write_be_bytes(x: &BigUint, out: &mut [u8]) {
        // to_bytes_be() yields [0] for zero, which has a byte_len of 0
        if out.is_empty() {
            return;
        }
        out.copy_from_slice(&x.to_bytes_be());
    }

    fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        base.modpow(exponent, modulus)
    }

    fn group_cache() -> &'static OnceCell<GroupParameters<Self>> {
        static GROUP: OnceCell<GroupParameters<NumBigint>> = OnceCell::new();
        &GROUP
    }

    fn is_one(x: &BigUint) -> bool {
        x.is_one()
    }
}
