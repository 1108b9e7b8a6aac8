// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::FieldError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default prime size. 128 bits is far below current recommendations and is kept
/// for compatibility with existing share sets.
pub const DEFAULT_BIT_LENGTH: u64 = 128;
pub const DEFAULT_PRIMALITY_ROUNDS: usize = 20;
pub const DEFAULT_MAX_PRIME_CANDIDATES: usize = 100_000;
pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: usize = 1_000_000;

/// Below these values a warning is logged when a field is created.
pub(crate) const WEAK_BIT_LENGTH: u64 = 128;
pub(crate) const WEAK_PRIMALITY_ROUNDS: usize = 8;

/// Parameters controlling field generation and rejection sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldParams {
    /// Exact bit length of the generated prime
    pub bit_length: u64,
    /// Number of Miller-Rabin witnesses per candidate
    pub primality_rounds: usize,
    /// Upper bound on prime candidates drawn before giving up
    pub max_prime_candidates: usize,
    /// Upper bound on draws for a single rejection-sampled element
    pub max_sampling_attempts: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            primality_rounds: DEFAULT_PRIMALITY_ROUNDS,
            max_prime_candidates: DEFAULT_MAX_PRIME_CANDIDATES,
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
        }
    }
}

impl FieldParams {
    pub fn with_bit_length(mut self, bit_length: u64) -> Self {
        self.bit_length = bit_length;
        self
    }

    pub fn with_primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = rounds;
        self
    }

    pub fn with_max_prime_candidates(mut self, candidates: usize) -> Self {
        self.max_prime_candidates = candidates;
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Checks that every bound is usable.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.bit_length < 2 {
            return Err(FieldError::InvalidBitLength {
                bits: self.bit_length,
            });
        }
        if self.primality_rounds == 0 {
            return Err(FieldError::InvalidParameter {
                message: "primality_rounds must be at least 1".to_string(),
            });
        }
        if self.max_prime_candidates == 0 {
            return Err(FieldError::InvalidParameter {
                message: "max_prime_candidates must be at least 1".to_string(),
            });
        }
        if self.max_sampling_attempts == 0 {
            return Err(FieldError::InvalidParameter {
                message: "max_sampling_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// True when the parameters are below the levels this crate considers reasonable.
    pub fn is_weak(&self) -> bool {
        self.bit_length < WEAK_BIT_LENGTH || self.primality_rounds < WEAK_PRIMALITY_ROUNDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = FieldParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.bit_length, 128);
        assert!(!params.is_weak());
    }

    #[test]
    fn test_validate_rejects_degenerate_params() {
        assert_eq!(
            FieldParams::default().with_bit_length(1).validate(),
            Err(FieldError::InvalidBitLength { bits: 1 })
        );
        assert!(matches!(
            FieldParams::default().with_primality_rounds(0).validate(),
            Err(FieldError::InvalidParameter { .. })
        ));
        assert!(matches!(
            FieldParams::default().with_max_prime_candidates(0).validate(),
            Err(FieldError::InvalidParameter { .. })
        ));
        assert!(matches!(
            FieldParams::default().with_max_sampling_attempts(0).validate(),
            Err(FieldError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_reference_certainty_is_weak() {
        let params = FieldParams::default().with_primality_rounds(1);
        assert!(params.validate().is_ok());
        assert!(params.is_weak());
    }
}
