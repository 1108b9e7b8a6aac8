// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::FieldError;
use crate::params::FieldParams;
use crate::prime::{generate_prime, is_probable_prime};
use crate::sampling::sample_in_range;
use crate::utils::{mod_inverse, reduce};
use num_bigint::{BigInt, BigUint, Sign};
use rand::Rng;
use std::fmt;
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A prime field `Z/pZ`.
///
/// The modulus is fixed at construction. Elements are plain `BigInt`s; the field
/// only provides reduction, exponentiation, inversion and bounded sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    modulus: BigInt,
    bit_length: u64,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

impl Field {
    /// Generates a fresh probable prime of `params.bit_length` bits.
    pub fn generate<R: Rng + ?Sized>(params: &FieldParams, rng: &mut R) -> Result<Self, FieldError> {
        if params.is_weak() {
            warn!(
                bits = params.bit_length,
                rounds = params.primality_rounds,
                "Generating a field with weak parameters"
            );
        }
        let prime = generate_prime(params, rng)?;
        let field = Self::from_prime(prime);
        info!(field = %field.modulus, bits = field.bit_length, "Field generated");
        Ok(field)
    }

    /// Wraps a known modulus after checking that it is a probable prime.
    pub fn new<R: Rng + ?Sized>(
        modulus: BigInt,
        params: &FieldParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        params.validate()?;
        let Some(prime) = modulus.to_biguint() else {
            return Err(FieldError::NotPrime { modulus });
        };
        if !is_probable_prime(&prime, params.primality_rounds, rng) {
            return Err(FieldError::NotPrime { modulus });
        }
        Ok(Self::from_prime(prime))
    }

    fn from_prime(prime: BigUint) -> Self {
        Self {
            bit_length: prime.bits(),
            modulus: BigInt::from_biguint(Sign::Plus, prime),
        }
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Bit length of the modulus, also the width of sampled candidates.
    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }

    /// Reduces `x` into `[0, p)`.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        reduce(x, &self.modulus)
    }

    /// `base^exponent mod p`, always in `[0, p)`.
    pub fn pow(&self, base: &BigInt, exponent: u64) -> BigInt {
        base.modpow(&BigInt::from(exponent), &self.modulus)
    }

    /// Multiplicative inverse, `None` for elements congruent to zero.
    pub fn inverse(&self, x: &BigInt) -> Option<BigInt> {
        mod_inverse(x, &self.modulus)
    }

    /// True when `0 <= x < p`.
    pub fn contains(&self, x: &BigInt) -> bool {
        x.sign() != Sign::Minus && x < &self.modulus
    }

    /// Rejection-samples an element of `[lo, hi)` using candidates as wide as the field.
    pub fn sample_in_range<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lo: &BigInt,
        hi: &BigInt,
        max_attempts: usize,
    ) -> Result<BigInt, FieldError> {
        sample_in_range(rng, self.bit_length, lo, hi, max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_generate_field() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let field = Field::generate(&FieldParams::default(), &mut rng).unwrap();
        assert_eq!(field.bit_length(), 128);
        assert!(field.modulus() > &BigInt::from(u64::MAX));
        assert_eq!(field.to_string(), format!("GF({})", field.modulus()));
    }

    #[test]
    fn test_new_checks_primality() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let params = FieldParams::default();
        let field = Field::new(BigInt::from(101), &params, &mut rng).unwrap();
        assert_eq!(field.bit_length(), 7);
        assert_eq!(
            Field::new(BigInt::from(100), &params, &mut rng),
            Err(FieldError::NotPrime {
                modulus: BigInt::from(100)
            })
        );
        assert!(matches!(
            Field::new(BigInt::from(-101), &params, &mut rng),
            Err(FieldError::NotPrime { .. })
        ));
    }

    #[test]
    fn test_arithmetic() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let field = Field::new(BigInt::from(17), &FieldParams::default(), &mut rng).unwrap();
        assert_eq!(field.reduce(&BigInt::from(-1)), BigInt::from(16));
        assert_eq!(field.pow(&BigInt::from(3), 4), BigInt::from(81 % 17));
        assert_eq!(field.pow(&BigInt::from(5), 0), BigInt::from(1));
        assert_eq!(field.inverse(&BigInt::from(3)), Some(BigInt::from(6)));
        assert_eq!(field.inverse(&BigInt::from(34)), None);
        assert!(field.contains(&BigInt::from(0)));
        assert!(field.contains(&BigInt::from(16)));
        assert!(!field.contains(&BigInt::from(17)));
        assert!(!field.contains(&BigInt::from(-1)));
    }

    #[test]
    fn test_sample_in_range_uses_field_width() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let field = Field::new(BigInt::from(251), &FieldParams::default(), &mut rng).unwrap();
        let lo = BigInt::from(200);
        let hi = BigInt::from(251);
        for _ in 0..100 {
            let x = field.sample_in_range(&mut rng, &lo, &hi, 10_000).unwrap();
            assert!(x >= lo && x < hi);
        }
        // 256 is outside the 8-bit sampling width
        assert!(matches!(
            field.sample_in_range(&mut rng, &BigInt::from(256), &BigInt::from(300), 10),
            Err(FieldError::UnreachableRange { bits: 8, .. })
        ));
    }
}
