use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, U1024};
use once_cell::sync::OnceCell;

use super::BigIntEngine;
use crate::crypto::group::GroupParameters;

const WIDTH: usize = U1024::BYTES;

/// Fixed-width backend on top of `crypto_bigint::U1024`.
///
/// Values that need more than 1024 bits do not parse.
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptoBigint;

impl BigIntEngine for CryptoBigint {
    type Int = U1024;

    const NAME: &'static str = "crypto-bigint";

    fn from_word(word: u64) -> U1024 {
        U1024::from_u64(word)
    }

    fn sub_word(x: &U1024, word: u64) -> U1024 {
        x.wrapping_sub(&U1024::from_u64(word))
    }

    fn parse_hex(hex: &str) -> Option<U1024> {
        let padded;
        let hex = if hex.len() % 2 == 1 {
            padded = format!("0{hex}");
            padded.as_str()
        } else {
            hex
        };
        let bytes = hex::decode(hex).ok()?;
        Self::from_be_bytes(&bytes)
    }

    fn from_be_bytes(bytes: &[u8]) -> Option<U1024> {
        let significant = match bytes.iter().position(|&b| b != 0) {
            Some(start) => &bytes[start..],
            None => &[][..],
        };
        if significant.len() > WIDTH {
            return None;
        }
        let mut buf = [0u8; WIDTH];
        buf[WIDTH - significant.len()..].copy_from_slice(significant);
        Some(U1024::from_be_slice(&buf))
    }

    fn byte_len(x: &U1024) -> usize {
        (x.bits() as usize).div_ceil(8)
    }

    fn write_be_bytes(x: &U1024, out: &mut [u8]) {
        let full = x.to_be_bytes();
        out.copy_from_slice(&full[WIDTH - out.len()..]);
    }

    fn mod_exp(base: &U1024, exponent: &U1024, modulus: &U1024) -> U1024 {
        let params = DynResidueParams::new(modulus);
        DynResidue::new(base, params).pow(exponent).retrieve()
    }

    fn group_cache() -> &'static OnceCell<GroupParameters<Self>> {
        static GROUP: OnceCell<GroupParameters<CryptoBigint>> = OnceCell::new();
        &GROUP
    }
}
