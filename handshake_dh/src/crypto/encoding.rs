//! Fixed-width big-endian encoding of group elements.
//!
//! Values are right-aligned and zero-padded on the left:
//! `00 00 00 00 00 x1 x2 x3 ...`

use crate::crypto::engine::BigIntEngine;
use crate::error::{DhError, Result};

/// Writes `x` into the whole of `out`, left-padding with zero bytes.
pub fn write_fixed_be<E: BigIntEngine>(x: &E::Int, out: &mut [u8]) -> Result<()> {
    let len = E::byte_len(x);
    if len > out.len() {
        return Err(DhError::BufferTooSmall {
            needed: len,
            available: out.len(),
        });
    }

    let pad = out.len() - len;
    out[..pad].fill(0);
    E::write_be_bytes(x, &mut out[pad..]);
    Ok(())
}

pub fn read_be<E: BigIntEngine>(bytes: &[u8]) -> Result<E::Int> {
    E::from_be_bytes(bytes).ok_or(DhError::MalformedPeerKey)
}
