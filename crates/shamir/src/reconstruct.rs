// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Secret reconstruction from shares.

use crate::errors::Result;
use crate::shares::ShareSet;
use num_bigint::BigInt;
use sshare_field::Field;
use sshare_polynomial::interpolate_at_zero;
use tracing::debug;

/// Reconstructs a secret from the leading `threshold` shares of `shares`.
///
/// Only the first `threshold` entries take part; reorder with
/// [`ShareSet::subset`] to use other shareholders. A set shorter than the threshold
/// is interpolated as is and yields a field element that is generally not the
/// secret. The result is the secret reduced into `[0, p)`.
///
/// # Errors
///
/// `NonInvertibleElement` when two of the used x-coordinates coincide.
pub fn reconstruct_secret(shares: &ShareSet, threshold: usize, field: &Field) -> Result<BigInt> {
    let used = threshold.min(shares.len());
    if used < threshold {
        debug!(
            available = shares.len(),
            threshold, "Reconstructing from fewer shares than the threshold"
        );
    }

    let (xs, ys): (Vec<BigInt>, Vec<BigInt>) = shares
        .iter()
        .take(used)
        .map(|share| (share.x.clone(), share.y.clone()))
        .unzip();

    Ok(interpolate_at_zero(&xs, &ys, field)?)
}
