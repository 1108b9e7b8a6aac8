// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Probable prime search.

use crate::errors::FieldError;
use crate::params::FieldParams;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use tracing::{debug, trace};

/// Primes used for trial division before running Miller-Rabin.
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

/// Probabilistic primality test.
///
/// Runs trial division by the primes below 100, then `rounds` Miller-Rabin
/// iterations with random witnesses drawn from `rng`. A composite passes with
/// probability at most `4^-rounds`.
pub fn is_probable_prime<R: Rng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n is odd and larger than 97 from here on
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
            if x == one {
                return false;
            }
        }
        return false;
    }

    true
}

/// Samples random odd candidates of exactly `params.bit_length` bits until one
/// passes [`is_probable_prime`].
pub fn generate_prime<R: Rng + ?Sized>(
    params: &FieldParams,
    rng: &mut R,
) -> Result<BigUint, FieldError> {
    params.validate()?;

    let top_bit = params.bit_length - 1;
    for attempt in 1..=params.max_prime_candidates {
        let mut candidate = rng.gen_biguint(params.bit_length);
        candidate.set_bit(top_bit, true);
        if candidate.is_even() {
            candidate.set_bit(0, true);
        }
        trace!(attempt, "Testing prime candidate");

        if is_probable_prime(&candidate, params.primality_rounds, rng) {
            debug!(
                attempt,
                bits = params.bit_length,
                "Found probable prime"
            );
            return Ok(candidate);
        }
    }

    Err(FieldError::PrimeSearchExhausted {
        candidates: params.max_prime_candidates,
    })
}
