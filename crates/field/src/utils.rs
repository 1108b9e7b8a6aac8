// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use num_traits::Zero;

/// Reduces a number modulo a modulus.
///
/// # Arguments
///
/// * `x` - The number to reduce
/// * `modulus` - The modulus to reduce by
///
/// # Returns
///
/// The reduced number in the range [0, modulus)
pub fn reduce(x: &BigInt, modulus: &BigInt) -> BigInt {
    let mut r = x % modulus;
    if r < BigInt::zero() {
        r += modulus;
    }
    r
}

/// Multiplicative inverse of `x` modulo `modulus`, if one exists.
///
/// Negative inputs are reduced first. Returns `None` when `x` and `modulus`
/// share a factor, which for a prime modulus means `x ≡ 0`.
pub fn mod_inverse(x: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    reduce(x, modulus).modinv(modulus)
}
