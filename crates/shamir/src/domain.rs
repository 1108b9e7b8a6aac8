// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Domain splitting.
//!
//! The field `[0, p)` is cut into one sub-range per secret value. All randomness
//! used for a value (coefficients and x-coordinates) is drawn from its sub-range.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-open range `[lo, hi)` of field elements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Domain {
    pub lo: BigInt,
    pub hi: BigInt,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}

impl Domain {
    pub fn new(lo: BigInt, hi: BigInt) -> Self {
        Self { lo, hi }
    }

    /// Number of elements in the range, zero when `hi <= lo`.
    pub fn width(&self) -> BigInt {
        if self.is_empty() {
            BigInt::zero()
        } else {
            &self.hi - &self.lo
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    pub fn contains(&self, x: &BigInt) -> bool {
        x >= &self.lo && x < &self.hi
    }

    /// True when the two ranges share at least one element.
    pub fn overlaps(&self, other: &Domain) -> bool {
        !self.is_empty() && !other.is_empty() && self.lo < other.hi && other.lo < self.hi
    }
}

/// The domain assigned to every secret value, ordered by value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainPartition(BTreeMap<BigInt, Domain>);

impl DomainPartition {
    pub fn get(&self, value: &BigInt) -> Option<&Domain> {
        self.0.get(value)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, BigInt, Domain> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DomainPartition {
    type Item = (&'a BigInt, &'a Domain);
    type IntoIter = btree_map::Iter<'a, BigInt, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits `[0, modulus)` between `sorted_values`.
///
/// Each value gets `split = modulus / count` elements starting at the running
/// limit; the upper bound is clamped to `modulus` only when it would exceed it.
/// The running limit then advances by `split + 1`, which leaves one element between
/// consecutive domains unassigned. Existing share sets depend on these exact
/// bounds, so the gap is kept.
///
/// A value that appears more than once keeps the domain of its last position.
/// Trailing domains of very small fields can come out empty.
pub fn partition(sorted_values: &[BigInt], modulus: &BigInt) -> DomainPartition {
    let mut domains = BTreeMap::new();
    if sorted_values.is_empty() {
        return DomainPartition(domains);
    }

    let split = modulus / BigInt::from(sorted_values.len());
    let mut current = BigInt::zero();

    for value in sorted_values {
        let upper = &current + &split;
        let hi = if modulus < &upper {
            modulus.clone()
        } else {
            upper
        };
        domains.insert(value.clone(), Domain::new(current.clone(), hi));
        current += &split + BigInt::one();
    }

    DomainPartition(domains)
}
