//! Error types for polynomial operations.

use num_bigint::BigInt;
use sshare_field::FieldError;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Threshold of zero (a sharing polynomial needs a degree-0 term)
    #[error("Invalid threshold {threshold}: must be at least 1")]
    InvalidThreshold { threshold: usize },

    /// x- and y-coordinate slices of different lengths
    #[error("Point length mismatch: {xs} x-coordinates, {ys} y-coordinates")]
    LengthMismatch { xs: usize, ys: usize },

    /// `x_j - x_i` has no inverse modulo the field prime
    #[error("Non-invertible element: x-coordinates {xi} and {xj} coincide in the field")]
    NonInvertibleElement { xi: BigInt, xj: BigInt },

    /// Failure while sampling coefficients
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}
