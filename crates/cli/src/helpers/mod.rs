// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

pub mod telemetry;

/// Seeded generator for reproducible runs, entropy otherwise.
pub fn create_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = create_rng(Some(42)).gen();
        let b: u64 = create_rng(Some(42)).gen();
        assert_eq!(a, b);
    }
}
