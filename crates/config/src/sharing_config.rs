// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sshare_field::{
    FieldParams, DEFAULT_BIT_LENGTH, DEFAULT_MAX_PRIME_CANDIDATES, DEFAULT_MAX_SAMPLING_ATTEMPTS,
    DEFAULT_PRIMALITY_ROUNDS,
};
use tracing::{debug, info};

use crate::load_config::{find_in_parent, resolve_config_path, ConfigLocation};

pub const DEFAULT_CONFIG_NAME: &str = "sshare.config.yaml";
pub const ENV_PREFIX: &str = "SSHARE_";

pub const DEFAULT_THRESHOLD: usize = 3;
pub const DEFAULT_SHAREHOLDERS: usize = 5;

/// Runtime configuration for the sharing engine and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharingConfig {
    /// Bit length of the generated prime modulus
    pub bit_length: u64,
    /// Miller-Rabin rounds per candidate
    pub primality_rounds: usize,
    pub max_prime_candidates: usize,
    pub max_sampling_attempts: usize,
    /// Minimum shares needed to reconstruct (k)
    pub threshold: usize,
    /// Shares generated per value (n)
    pub shareholders: usize,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            primality_rounds: DEFAULT_PRIMALITY_ROUNDS,
            max_prime_candidates: DEFAULT_MAX_PRIME_CANDIDATES,
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
            threshold: DEFAULT_THRESHOLD,
            shareholders: DEFAULT_SHAREHOLDERS,
            seed: None,
            config_file: None,
        }
    }
}

impl SharingConfig {
    pub fn field_params(&self) -> FieldParams {
        FieldParams::default()
            .with_bit_length(self.bit_length)
            .with_primality_rounds(self.primality_rounds)
            .with_max_prime_candidates(self.max_prime_candidates)
            .with_max_sampling_attempts(self.max_sampling_attempts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold < 1 {
            bail!("threshold must be at least 1");
        }
        if self.threshold > self.shareholders {
            bail!(
                "threshold ({}) cannot exceed shareholders ({})",
                self.threshold,
                self.shareholders
            );
        }
        self.field_params()
            .validate()
            .context("Invalid field parameters")?;
        Ok(())
    }
}

fn default_config_dir(cwd: &Path) -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("sshare"))
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Load configuration from defaults, the YAML file and `SSHARE_*` environment
/// variables, in increasing order of precedence.
pub fn load_config(cli_file: Option<PathBuf>) -> Result<SharingConfig> {
    let cwd = std::env::current_dir().context("Could not read the working directory")?;
    let location = resolve_config_path(
        find_in_parent,
        cwd.clone(),
        default_config_dir(&cwd),
        DEFAULT_CONFIG_NAME,
        cli_file,
    );

    let mut figment = Figment::from(Serialized::defaults(SharingConfig::default()));
    let config_file = match &location {
        ConfigLocation::Explicit(path) if !path.exists() => {
            bail!("Config file not found: {}", path.display());
        }
        location if location.path().exists() => {
            figment = figment.merge(Yaml::file(location.path()));
            Some(location.path().to_path_buf())
        }
        location => {
            debug!(path = %location.path().display(), "No config file, using defaults");
            None
        }
    };

    let mut config: SharingConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = config_file;
    config.validate()?;

    info!(
        file = ?config.config_file,
        bit_length = config.bit_length,
        threshold = config.threshold,
        shareholders = config.shareholders,
        "Configuration loaded"
    );

    Ok(config)
}
