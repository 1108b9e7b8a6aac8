// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sshare_field::{Field, FieldParams};

/// 2^128 - 159, the largest 128-bit prime.
pub fn prime_128() -> BigInt {
    (BigInt::one() << 128u32) - BigInt::from(159)
}

pub fn create_rng_from_u64(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Wraps a known prime in a [`Field`]. Panics if `modulus` is not prime.
pub fn create_test_field(modulus: impl Into<BigInt>) -> Field {
    let mut rng = create_rng_from_u64(0);
    Field::new(modulus.into(), &FieldParams::default(), &mut rng)
        .expect("test modulus must be prime")
}

/// A 128-bit field with a fixed modulus, matching the default bit length.
pub fn create_field_128() -> Field {
    create_test_field(prime_128())
}
