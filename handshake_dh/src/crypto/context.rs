use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::DhConfig;
use crate::crypto::encoding::{read_be, write_fixed_be};
use crate::crypto::engine::{BigIntEngine, DefaultEngine};
use crate::crypto::group::GroupParameters;
use crate::crypto::keygen::{self, KeyPair};
use crate::crypto::validation::validate_public_key;
use crate::error::{DhError, Result};

/// One side of a Diffie-Hellman exchange over the fixed 1024-bit group.
///
/// A context is not meant to be shared between threads without external
/// locking; the group parameters it points at are.
pub struct DhContext<E: BigIntEngine = DefaultEngine> {
    group: &'static GroupParameters<E>,
    config: DhConfig,
    key_pair: Option<KeyPair<E>>,
}

impl<E: BigIntEngine> DhContext<E> {
    /// Creates a context whose private exponents are `key_bits` long.
    pub fn new(key_bits: usize) -> Result<Self> {
        Self::with_config(DhConfig::new(key_bits))
    }

    pub fn with_config(config: DhConfig) -> Result<Self> {
        if config.key_bits < 2 {
            return Err(DhError::InvalidKeyLength);
        }
        let group = GroupParameters::<E>::shared()?;
        Ok(Self {
            group,
            config,
            key_pair: None,
        })
    }

    pub fn group(&self) -> &'static GroupParameters<E> {
        self.group
    }

    pub fn key_bits(&self) -> usize {
        self.config.key_bits
    }

    pub fn key_pair(&self) -> Option<&KeyPair<E>> {
        self.key_pair.as_ref()
    }

    pub fn has_key_pair(&self) -> bool {
        self.key_pair.is_some()
    }

    /// Generates a fresh key pair from the operating system RNG, replacing
    /// any existing one.
    pub fn generate_key_pair(&mut self) -> Result<()> {
        self.generate_key_pair_with(&mut OsRng)
    }

    pub fn generate_key_pair_with(&mut self, rng: &mut impl RngCore) -> Result<()> {
        self.key_pair = None;
        let pair = keygen::generate(
            self.group,
            self.config.key_bits,
            self.config.max_keygen_attempts,
            rng,
        )?;
        self.key_pair = Some(pair);
        Ok(())
    }

    /// Writes the public value into all of `out`, big-endian and
    /// zero-padded on the left.
    pub fn public_key_bytes(&self, out: &mut [u8]) -> Result<()> {
        let pair = self.key_pair.as_ref().ok_or(DhError::KeyNotGenerated)?;
        write_fixed_be::<E>(&pair.public_key, out)
    }

    /// The public value at the width of the modulus.
    pub fn public_key_vec(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.group.modulus_bytes()];
        self.public_key_bytes(&mut out)?;
        Ok(out)
    }

    /// Computes `peer^x mod p` and writes it into the first `peer.len()`
    /// bytes of `out` using the same padding as [`public_key_bytes`].
    /// Returns the number of bytes written.
    ///
    /// [`public_key_bytes`]: Self::public_key_bytes
    pub fn compute_shared_secret(&self, peer: &[u8], out: &mut [u8]) -> Result<usize> {
        let len = check_peer_len(peer.len())?;
        if out.len() < len {
            return Err(DhError::BufferTooSmall {
                needed: len,
                available: out.len(),
            });
        }
        let pair = self.key_pair.as_ref().ok_or(DhError::KeyNotGenerated)?;

        let peer_key = read_be::<E>(peer)?;
        validate_public_key::<E>(
            &peer_key,
            self.group.modulus(),
            Some(self.group.subgroup_order()),
        )?;

        let secret = E::mod_exp(&peer_key, &pair.private_key, self.group.modulus());
        write_fixed_be::<E>(&secret, &mut out[..len])?;
        Ok(len)
    }

    /// [`compute_shared_secret`](Self::compute_shared_secret) into a fresh
    /// buffer as wide as `peer`.
    pub fn shared_secret_vec(&self, peer: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; peer.len()];
        self.compute_shared_secret(peer, &mut out)?;
        Ok(out)
    }
}

/// Peer lengths must stay representable as a signed 32-bit length on the wire.
fn check_peer_len(len: usize) -> Result<usize> {
    if len >= i32::MAX as usize {
        return Err(DhError::PeerKeyTooLong { len });
    }
    Ok(len)
}

impl<E: BigIntEngine> std::fmt::Debug for DhContext<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DhContext")
            .field("backend", &E::NAME)
            .field("config", &self.config)
            .field("key_pair", &self.key_pair)
            .finish()
    }
}
