// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for field operations.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while building or sampling from a prime field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The requested prime bit length cannot hold a prime
    #[error("Invalid bit length {bits}: a field prime needs at least 2 bits")]
    InvalidBitLength { bits: u64 },

    /// A parameter that bounds a search or a test was zero
    #[error("Invalid field parameter: {message}")]
    InvalidParameter { message: String },

    /// An externally supplied modulus failed the primality test
    #[error("Modulus {modulus} is not a probable prime")]
    NotPrime { modulus: BigInt },

    /// Sampling was requested from an empty `[lo, hi)` range
    #[error("Empty sampling range [{lo}, {hi})")]
    EmptyRange { lo: BigInt, hi: BigInt },

    /// No integer of the sampling bit length can fall inside the range
    #[error("Range [{lo}, {hi}) is unreachable with {bits}-bit samples")]
    UnreachableRange { lo: BigInt, hi: BigInt, bits: u64 },

    /// Rejection sampling ran out of attempts
    #[error("Rejection sampling exhausted after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    /// Prime search ran out of candidates
    #[error("No probable prime found after {candidates} candidates")]
    PrimeSearchExhausted { candidates: usize },
}
