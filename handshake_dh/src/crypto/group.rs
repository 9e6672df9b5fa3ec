//! The fixed 1024-bit MODP group shared by both ends of the handshake.

use crate::crypto::engine::BigIntEngine;
use crate::error::{DhError, Result};

/// RFC 2409 Second Oakley Group prime.
pub const P1024: &str = "\
FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
29024E088A67CC74020BBEA63B139B22514A08798E3404DD\
EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245\
E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381\
FFFFFFFFFFFFFFFF";

/// `(P1024 - 1) / 2`, the order of the subgroup generated by 2.
pub const Q1024: &str = "\
7FFFFFFFFFFFFFFFE487ED5110B4611A62633145C06E0E68\
948127044533E63A0105DF531D89CD9128A5043CC71A026E\
F7CA8CD9E69D218D98158536F92F8A1BA7F09AB6B6A8E122\
F242DABB312F3F637A262174D31BF6B585FFAE5B7A035BF6\
F71C35FDAD44CFD2D74F9208BE258FF324943328F67329C0\
FFFFFFFFFFFFFFFF";

pub const GENERATOR: u64 = 2;

/// Modulus, generator and subgroup order. Never mutated once built.
#[derive(Clone, Debug)]
pub struct GroupParameters<E: BigIntEngine> {
    p: E::Int,
    g: E::Int,
    q: E::Int,
}

impl<E: BigIntEngine> GroupParameters<E> {
    /// Returns the process-wide parameters for backend `E`, parsing the
    /// embedded constants on first use.
    pub fn shared() -> Result<&'static Self> {
        E::group_cache().get_or_try_init(|| {
            log::debug!("Loading 1024-bit DH group for {} backend", E::NAME);
            Self::parse()
        })
    }

    /// Builds a fresh, unshared copy from the embedded constants.
    pub fn parse() -> Result<Self> {
        let p = E::parse_hex(P1024).ok_or(DhError::InvalidGroupParameter("p"))?;
        let q = E::parse_hex(Q1024).ok_or(DhError::InvalidGroupParameter("q"))?;
        Ok(Self {
            p,
            g: E::from_word(GENERATOR),
            q,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(p: E::Int, g: E::Int, q: E::Int) -> Self {
        Self { p, g, q }
    }

    pub fn modulus(&self) -> &E::Int {
        &self.p
    }

    pub fn generator(&self) -> &E::Int {
        &self.g
    }

    pub fn subgroup_order(&self) -> &E::Int {
        &self.q
    }

    /// Width of the modulus in bytes; public values and secrets fit in it.
    pub fn modulus_bytes(&self) -> usize {
        E::byte_len(&self.p)
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bytes() * 8
    }
}
