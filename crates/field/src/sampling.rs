// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bounded rejection sampling of field elements.

use crate::errors::FieldError;
use num_bigint::{BigInt, RandBigInt, Sign};
use rand::Rng;
use tracing::trace;

/// Draws uniformly random `bit_length`-bit integers until one lands in `[lo, hi)`.
///
/// The range is checked up front: an empty range, or one that starts at or beyond
/// `2^bit_length`, can never be hit and is reported instead of looping. At most
/// `max_attempts` draws are made.
pub fn sample_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    bit_length: u64,
    lo: &BigInt,
    hi: &BigInt,
    max_attempts: usize,
) -> Result<BigInt, FieldError> {
    if hi <= lo {
        return Err(FieldError::EmptyRange {
            lo: lo.clone(),
            hi: hi.clone(),
        });
    }
    if lo.sign() == Sign::Minus || lo.bits() > bit_length {
        return Err(FieldError::UnreachableRange {
            lo: lo.clone(),
            hi: hi.clone(),
            bits: bit_length,
        });
    }

    for attempt in 1..=max_attempts {
        let candidate = BigInt::from(rng.gen_biguint(bit_length));
        if &candidate >= lo && &candidate < hi {
            trace!(attempt, "Sampled element in range");
            return Ok(candidate);
        }
    }

    Err(FieldError::SamplingExhausted {
        attempts: max_attempts,
    })
}
