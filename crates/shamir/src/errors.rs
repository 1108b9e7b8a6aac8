// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use sshare_field::FieldError;
use sshare_polynomial::PolynomialError;
use thiserror::Error;

pub type Result<T, E = SharingError> = std::result::Result<T, E>;

/// Errors surfaced by the secret sharing engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharingError {
    /// Bad threshold, share count or value set, an unusable field, or an empty domain
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    /// Two x-coordinates of one reconstruction coincide in the field
    #[error("Non-invertible element: x-coordinates {xi} and {xj} coincide in the field")]
    NonInvertibleElement { xi: BigInt, xj: BigInt },

    /// A bounded sampling loop ran out of attempts
    #[error("Randomness exhausted: {message}")]
    RandomnessExhausted { message: String },
}

impl SharingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SharingError::InvalidParameters {
            message: message.into(),
        }
    }
}

impl From<FieldError> for SharingError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::SamplingExhausted { .. } | FieldError::PrimeSearchExhausted { .. } => {
                SharingError::RandomnessExhausted {
                    message: err.to_string(),
                }
            }
            FieldError::InvalidBitLength { .. }
            | FieldError::InvalidParameter { .. }
            | FieldError::NotPrime { .. }
            | FieldError::EmptyRange { .. }
            | FieldError::UnreachableRange { .. } => SharingError::invalid(err.to_string()),
        }
    }
}

impl From<PolynomialError> for SharingError {
    fn from(err: PolynomialError) -> Self {
        match err {
            PolynomialError::NonInvertibleElement { xi, xj } => {
                SharingError::NonInvertibleElement { xi, xj }
            }
            PolynomialError::Field(err) => err.into(),
            PolynomialError::InvalidThreshold { .. } | PolynomialError::LengthMismatch { .. } => {
                SharingError::invalid(err.to_string())
            }
        }
    }
}
