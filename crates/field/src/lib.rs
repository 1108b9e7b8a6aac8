// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Prime Fields
//!
//! Generation of the prime field that every share of a secret set lives in,
//! together with the bounded rejection sampling used to draw field elements from
//! a sub-range of the field.
//!
//! - Primes are found by sampling odd candidates of an exact bit length and running
//!   trial division plus Miller-Rabin (`primality_rounds` witnesses).
//! - All sampling loops are capped; exhausting a cap is an error rather than a hang.
//! - Elements are `num_bigint::BigInt`s.

pub mod errors;
pub mod field;
pub mod params;
pub mod prime;
pub mod sampling;
pub mod utils;

pub use errors::FieldError;
pub use field::Field;
pub use params::*;
pub use prime::{generate_prime, is_probable_prime};
pub use sampling::sample_in_range;
pub use utils::*;
