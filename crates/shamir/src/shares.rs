// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::domain::Domain;
use crate::errors::{Result, SharingError};
use num_bigint::BigInt;
use rand::Rng;
use sshare_field::Field;
use sshare_polynomial::SharingPolynomial;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One point `(x, y)` on a value's sharing polynomial.
///
/// `y` is not reduced modulo the field prime, see [`SharingPolynomial::evaluate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}

/// The shares of a single value, one per shareholder, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareSet(pub Vec<Share>);

impl ShareSet {
    pub fn new(shares: Vec<Share>) -> Self {
        Self(shares)
    }

    /// Zips index-aligned x- and y-coordinates into a share set.
    pub fn from_coordinates(xs: Vec<BigInt>, ys: Vec<BigInt>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(SharingError::invalid(format!(
                "{} x-coordinates but {} y-coordinates",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self(
            xs.into_iter()
                .zip(ys)
                .map(|(x, y)| Share::new(x, y))
                .collect(),
        ))
    }

    pub fn get(&self, index: usize) -> Option<&Share> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.0.iter()
    }

    pub fn xs(&self) -> Vec<BigInt> {
        self.0.iter().map(|s| s.x.clone()).collect()
    }

    pub fn ys(&self) -> Vec<BigInt> {
        self.0.iter().map(|s| s.y.clone()).collect()
    }

    /// A new set holding the shares at `indices`, in that order.
    ///
    /// Reconstruction reads the leading shares of a set, so this is how a caller
    /// picks which shareholders take part.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        indices
            .iter()
            .map(|&i| {
                self.0.get(i).cloned().ok_or_else(|| {
                    SharingError::invalid(format!(
                        "share index {i} out of bounds for {} shares",
                        self.0.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits one value into `shareholders` shares with the given threshold.
///
/// The `threshold - 1` coefficients and every x-coordinate are rejection-sampled
/// from `domain`. Returns the sampled polynomial next to the shares so callers can
/// inspect it; the engine only hands out the shares.
pub fn build_value_shares<R: Rng + ?Sized>(
    value: &BigInt,
    domain: &Domain,
    threshold: usize,
    shareholders: usize,
    field: &Field,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(SharingPolynomial, ShareSet)> {
    if domain.is_empty() {
        return Err(SharingError::invalid(format!(
            "domain {domain} is empty, the field is too small for the value set"
        )));
    }

    debug!(lo = %domain.lo, hi = %domain.hi, "Generating values between bounds");
    let polynomial =
        SharingPolynomial::sample(field, threshold, &domain.lo, &domain.hi, max_attempts, rng)?;
    trace!(polynomial = %polynomial, coefficients = ?polynomial.coefficients(), "Polynomial");

    let shares = (0..shareholders)
        .map(|_| -> Result<Share> {
            let x = field.sample_in_range(&mut *rng, &domain.lo, &domain.hi, max_attempts)?;
            let y = polynomial.evaluate(value, &x, field);
            Ok(Share::new(x, y))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((polynomial, ShareSet(shares)))
}
