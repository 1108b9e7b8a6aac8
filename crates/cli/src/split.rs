// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use sshare_config::SharingConfig;
use sshare_shamir::SecretSharing;
use tracing::info;

use crate::helpers::create_rng;

pub fn execute(config: &SharingConfig, values: Vec<BigInt>) -> Result<()> {
    let rng = create_rng(config.seed);
    let mut sharing = SecretSharing::with_params(
        values,
        config.threshold,
        config.shareholders,
        config.field_params(),
        rng,
    )
    .context("Could not set up secret sharing")?;
    info!("Using field {}", sharing.field());

    let shares = sharing.build_shares().context("Could not build shares")?;

    println!("field: {}", sharing.field());
    for (value, set) in &shares {
        println!("value {}:", value);
        for (index, share) in set.iter().enumerate() {
            println!("  share {}: x={} y={}", index + 1, share.x, share.y);
        }
        let secret = sharing
            .reconstruct_secret(set)
            .with_context(|| format!("Could not reconstruct value {}", value))?;
        println!("  reconstructed: {}", secret);
    }

    Ok(())
}
