// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use sshare_config::SharingConfig;
use sshare_shamir::SecretSharing;

use crate::helpers::create_rng;

pub fn execute(config: &SharingConfig, values: Vec<BigInt>) -> Result<()> {
    let rng = create_rng(config.seed);
    let sharing = SecretSharing::with_params(
        values,
        config.threshold,
        config.shareholders,
        config.field_params(),
        rng,
    )
    .context("Could not set up secret sharing")?;

    println!("field: {}", sharing.field());
    for (value, domain) in sharing.partition_domain().iter() {
        let marker = if domain.is_empty() { " (empty)" } else { "" };
        println!("{}: {}{}", value, domain, marker);
    }

    Ok(())
}
