// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sshare_field::{sample_in_range, Field, FieldParams};

fn mersenne_61() -> Field {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let modulus = (BigInt::one() << 61) - 1;
    Field::new(modulus, &FieldParams::default(), &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn samples_land_in_requested_range(lo in 0u32..60_000, width in 1u32..5_000, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let lo = BigInt::from(lo);
        let hi = &lo + BigInt::from(width);
        let sample = sample_in_range(&mut rng, 16, &lo, &hi, 1_000_000).unwrap();
        prop_assert!(sample >= lo && sample < hi);
    }

    #[test]
    fn inverse_of_nonzero_element(x in any::<i64>()) {
        let field = mersenne_61();
        let x = BigInt::from(x);
        match field.inverse(&x) {
            Some(inv) => {
                prop_assert!(field.contains(&inv));
                prop_assert_eq!(field.reduce(&(x * inv)), BigInt::one());
            }
            None => prop_assert!(field.reduce(&x).is_zero()),
        }
    }

    #[test]
    fn reduce_is_canonical(x in any::<i128>()) {
        let field = mersenne_61();
        let reduced = field.reduce(&BigInt::from(x));
        prop_assert!(field.contains(&reduced));
        prop_assert_eq!(field.reduce(&reduced), reduced.clone());
        prop_assert!(((BigInt::from(x) - &reduced) % field.modulus()).is_zero());
    }
}

#[test]
fn generated_field_has_requested_width() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let params = FieldParams::default().with_bit_length(64);
    let field = Field::generate(&params, &mut rng).unwrap();
    assert_eq!(field.bit_length(), 64);
    assert_eq!(field.modulus().bits(), 64);
}
