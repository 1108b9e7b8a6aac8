// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Sharing Polynomials
//!
//! Polynomials with big integer coefficients used to split a secret into shares,
//! and the Lagrange interpolation that recovers it.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation.
//! - Implicit degree-0 term: the secret is supplied at evaluation time and never stored.
//! - Coefficients rejection-sampled from a caller supplied sub-range of the field.
//! - Serialization: Optional serde support with bincode integration.

pub mod errors;
pub mod lagrange;
pub mod polynomial;

pub use errors::PolynomialError;
pub use lagrange::interpolate_at_zero;
pub use polynomial::SharingPolynomial;
