// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use num_bigint::BigInt;
use sshare_config::{load_config, SharingConfig};
use tracing::{debug, instrument, Level};

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{partition, prime, split};

#[derive(Parser, Debug)]
#[command(name = "sshare")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), ")"))]
#[command(about = "Split a set of values into threshold shares over a generated prime field", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sshare -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let mut config = load_config(self.config.clone())?;
        debug!("Config loaded from: {:?}", config.config_file);

        match self.command {
            Commands::Split { values, field } => {
                field.apply(&mut config)?;
                split::execute(&config, values)?
            }
            Commands::Partition { values, field } => {
                field.apply(&mut config)?;
                partition::execute(&config, values)?
            }
            Commands::Prime { bits, seed } => {
                FieldArgs {
                    bits,
                    seed,
                    ..Default::default()
                }
                .apply(&mut config)?;
                prime::execute(&config)?
            }
        }

        Ok(())
    }
}

/// Overrides shared by the commands that build a sharing engine.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Minimum number of shares needed to reconstruct a value
    #[arg(short = 'k', long)]
    pub threshold: Option<usize>,

    /// Number of shares generated per value
    #[arg(short = 'n', long)]
    pub shareholders: Option<usize>,

    /// Bit length of the generated prime
    #[arg(short, long)]
    pub bits: Option<u64>,

    /// Seed the random source for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl FieldArgs {
    pub fn apply(&self, config: &mut SharingConfig) -> Result<()> {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(shareholders) = self.shareholders {
            config.shareholders = shareholders;
        }
        if let Some(bits) = self.bits {
            config.bit_length = bits;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Share every value and reconstruct it from its shares
    Split {
        /// Comma separated integers to share. Eg. `--values 432,256,375,192`
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        values: Vec<BigInt>,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Print the domain every value draws its randomness from
    Partition {
        /// Comma separated integers to partition the field for
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        values: Vec<BigInt>,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Generate a probable prime
    Prime {
        /// Bit length of the prime
        #[arg(short, long)]
        bits: Option<u64>,

        /// Seed the random source for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
