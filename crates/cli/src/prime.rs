// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sshare_config::SharingConfig;
use sshare_field::generate_prime;

use crate::helpers::create_rng;

pub fn execute(config: &SharingConfig) -> Result<()> {
    let mut rng = create_rng(config.seed);
    let prime = generate_prime(&config.field_params(), &mut rng)
        .with_context(|| format!("Could not generate a {}-bit prime", config.bit_length))?;
    println!("{}", prime);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_seeded() {
        let config = SharingConfig {
            seed: Some(3),
            bit_length: 48,
            ..Default::default()
        };
        assert!(execute(&config).is_ok());

        let config = SharingConfig {
            bit_length: 1,
            ..config
        };
        assert!(execute(&config).is_err());
    }
}
