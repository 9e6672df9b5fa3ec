//! Public value checks from RFC 2631, section 2.1.5.

use crate::crypto::engine::BigIntEngine;
use crate::error::{DhError, PublicKeyRejection, Result};

/// Outcome of the advisory `y^q mod p == 1` check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubgroupCheck {
    Confirmed,
    /// The value passed the range check but is outside the order-q subgroup.
    Unconfirmed,
    Skipped,
}

/// Accepts `y` iff `2 <= y <= p - 2`.
///
/// When `q` is given, `y^q mod p` is also computed. A result other than 1 is
/// logged as a warning and reported as [`SubgroupCheck::Unconfirmed`], but is
/// never a rejection: the test fails for about half of all in-range values,
/// and counterparts that build their public values differently must still be
/// able to complete the exchange.
pub fn validate_public_key<E: BigIntEngine>(
    y: &E::Int,
    p: &E::Int,
    q: Option<&E::Int>,
) -> Result<SubgroupCheck> {
    if *y < E::from_word(2) {
        let reason = PublicKeyRejection::BelowMinimum;
        log::error!("{}", reason);
        return Err(DhError::InvalidPublicKey(reason));
    }

    if *y > E::sub_word(p, 2) {
        let reason = PublicKeyRejection::AboveMaximum;
        log::error!("{}", reason);
        return Err(DhError::InvalidPublicKey(reason));
    }

    let Some(q) = q else {
        return Ok(SubgroupCheck::Skipped);
    };

    if E::is_one(&E::mod_exp(y, q, p)) {
        Ok(SubgroupCheck::Confirmed)
    } else {
        log::warn!("DH public key does not fulfill y^q mod p = 1");
        Ok(SubgroupCheck::Unconfirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::engine::NumBigint;
    use crate::crypto::group::GroupParameters;
    use num_bigint::BigUint;

    fn check(y: &BigUint) -> Result<SubgroupCheck> {
        let group = GroupParameters::<NumBigint>::shared().unwrap();
        validate_public_key::<NumBigint>(y, group.modulus(), Some(group.subgroup_order()))
    }

    #[test]
    fn rejects_values_below_two() {
        for y in [0u32, 1] {
            assert_eq!(
                check(&BigUint::from(y)),
                Err(DhError::InvalidPublicKey(PublicKeyRejection::BelowMinimum))
            );
        }
    }

    #[test]
    fn rejects_values_above_p_minus_two() {
        let p = GroupParameters::<NumBigint>::shared().unwrap().modulus().clone();
        for y in [&p - 1u32, p.clone(), &p + 1u32] {
            assert_eq!(
                check(&y),
                Err(DhError::InvalidPublicKey(PublicKeyRejection::AboveMaximum))
            );
        }
    }

    #[test]
    fn accepts_the_bounds() {
        let p = GroupParameters::<NumBigint>::shared().unwrap().modulus().clone();
        assert_eq!(check(&BigUint::from(2u32)), Ok(SubgroupCheck::Confirmed));
        assert!(check(&(&p - 2u32)).is_ok());
    }

    #[test]
    fn subgroup_miss_is_only_advisory() {
        // 5 is a quadratic non-residue modulo P1024
        assert_eq!(check(&BigUint::from(5u32)), Ok(SubgroupCheck::Unconfirmed));
    }

    #[test]
    fn subgroup_check_is_optional() {
        let p = GroupParameters::<NumBigint>::shared().unwrap().modulus();
        let r = validate_public_key::<NumBigint>(&BigUint::from(5u32), p, None);
        assert_eq!(r, Ok(SubgroupCheck::Skipped));
    }
}
