use rand::RngCore;

use crate::crypto::engine::BigIntEngine;
use crate::crypto::group::GroupParameters;
use crate::crypto::validation::validate_public_key;
use crate::error::{DhError, Result};

/// Private exponent `x` and public value `y = g^x mod p`.
#[derive(Clone)]
pub struct KeyPair<E: BigIntEngine> {
    pub(crate) private_key: E::Int,
    pub(crate) public_key: E::Int,
}

impl<E: BigIntEngine> KeyPair<E> {
    pub fn public_key(&self) -> &E::Int {
        &self.public_key
    }
}

impl<E: BigIntEngine> std::fmt::Debug for KeyPair<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Draws one exponent of at most `bits` bits. `None` if it misses `[2, p-2]`.
fn random_exponent<E: BigIntEngine>(
    group: &GroupParameters<E>,
    bits: usize,
    rng: &mut impl RngCore,
) -> Option<E::Int> {
    let bits = bits.min(group.modulus_bits());
    let mut bytes = vec![0u8; bits.div_ceil(8)];
    rng.fill_bytes(&mut bytes);
    let excess = bytes.len() * 8 - bits;
    if let Some(top) = bytes.first_mut() {
        *top &= 0xFFu8 >> excess;
    }

    let x = E::from_be_bytes(&bytes)?;
    (x >= E::from_word(2) && x <= E::sub_word(group.modulus(), 2)).then_some(x)
}

/// Produces a key pair whose public value passes [`validate_public_key`].
///
/// Exponents outside `[2, p-2]` and candidates failing the range check are
/// dropped and redrawn. Every draw counts toward `max_attempts` (`0` for no
/// limit).
pub fn generate<E: BigIntEngine>(
    group: &GroupParameters<E>,
    key_bits: usize,
    max_attempts: u32,
    rng: &mut impl RngCore,
) -> Result<KeyPair<E>> {
    if key_bits < 2 {
        return Err(DhError::InvalidKeyLength);
    }

    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);

        match random_exponent(group, key_bits, rng) {
            Some(private_key) => {
                let public_key = E::mod_exp(group.generator(), &private_key, group.modulus());
                match validate_public_key::<E>(
                    &public_key,
                    group.modulus(),
                    Some(group.subgroup_order()),
                ) {
                    Ok(_) => {
                        log::debug!("DH key pair generated after {} attempt(s)", attempts);
                        return Ok(KeyPair {
                            private_key,
                            public_key,
                        });
                    }
                    Err(DhError::InvalidPublicKey(reason)) => {
                        log::debug!("Discarding DH candidate {}: {}", attempts, reason);
                    }
                    Err(e) => return Err(e),
                }
            }
            None => log::debug!("Redrawing out-of-range DH exponent ({})", attempts),
        }

        if max_attempts != 0 && attempts >= max_attempts {
            log::error!("Giving up on DH key generation after {} attempts", attempts);
            return Err(DhError::KeyGenerationExhausted { attempts });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::engine::NumBigint;
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exponent_respects_requested_width() {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..32 {
            let Some(x) = random_exponent(group, 160, &mut rng) else {
                continue;
            };
            assert!(x.bits() <= 160);
            assert!(x >= BigUint::from(2u32));
        }
    }

    #[test]
    fn exponent_width_is_capped_by_modulus() {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let x = random_exponent(group, 4096, &mut rng).unwrap();
        assert!(&x <= &(group.modulus() - 2u32));
    }

    #[test]
    fn key_lengths_below_two_bits_are_rejected() {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for bits in [0, 1] {
            assert_eq!(
                generate(group, bits, 5, &mut rng).unwrap_err(),
                DhError::InvalidKeyLength
            );
        }
    }

    #[test]
    fn exponent_redraws_count_toward_the_retry_limit() {
        // p = 3 leaves [2, p-2] empty, so no exponent is ever accepted
        let group = GroupParameters::<NumBigint>::from_parts(
            BigUint::from(3u32),
            BigUint::from(2u32),
            BigUint::from(1u32),
        );
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            generate(&group, 8, 3, &mut rng).unwrap_err(),
            DhError::KeyGenerationExhausted { attempts: 3 }
        );
    }

    #[test]
    fn generated_public_value_matches_exponent() {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        let mut rng = StdRng::seed_from_u64(0xDEADBEEFCAFEA11C);
        let pair = generate(group, 1024, 0, &mut rng).unwrap();

        assert_eq!(
            pair.public_key,
            BigUint::from(2u32).modpow(&pair.private_key, group.modulus())
        );
    }

    #[test]
    fn degenerate_generator_exhausts_the_retry_limit() {
        // g = 1 makes every candidate public value 1
        let group = GroupParameters::<NumBigint>::from_parts(
            BigUint::from(23u32),
            BigUint::from(1u32),
            BigUint::from(11u32),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let r = generate(&group, 8, 5, &mut rng);
        assert_eq!(r.unwrap_err(), DhError::KeyGenerationExhausted { attempts: 5 });
    }

    #[test]
    fn small_group_candidates_stay_in_range() {
        let group = GroupParameters::<NumBigint>::from_parts(
            BigUint::from(23u32),
            BigUint::from(2u32),
            BigUint::from(11u32),
        );
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let pair = generate(&group, 8, 0, &mut rng).unwrap();
            assert!(pair.public_key >= BigUint::from(2u32));
            assert!(pair.public_key <= BigUint::from(21u32));
        }
    }

    #[test]
    fn debug_output_hides_private_exponent() {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let pair = generate(group, 256, 0, &mut rng).unwrap();
        let shown = format!("{:?}", pair);
        assert!(!shown.contains("private_key"));
    }
}
