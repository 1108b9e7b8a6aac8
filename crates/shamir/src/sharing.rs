// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::domain::{partition, DomainPartition};
use crate::errors::{Result, SharingError};
use crate::reconstruct::reconstruct_secret;
use crate::shares::{build_value_shares, ShareSet};
use num_bigint::BigInt;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use sshare_field::{Field, FieldParams};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Threshold secret sharing of a set of values over one prime field.
///
/// The field and the domain partition are fixed when the engine is built. Each
/// call to [`SecretSharing::build_shares`] draws fresh polynomials and shares from
/// the engine's random source, which the caller supplies so runs can be seeded.
pub struct SecretSharing<R = ChaCha20Rng> {
    values: Vec<BigInt>,
    threshold: usize,
    shareholders: usize,
    field: Field,
    params: FieldParams,
    domains: DomainPartition,
    rng: R,
}

impl<R: Rng> SecretSharing<R> {
    /// Builds an engine over a freshly generated field with default parameters.
    pub fn new<I, V>(values: I, threshold: usize, shareholders: usize, rng: R) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<BigInt>,
    {
        Self::with_params(values, threshold, shareholders, FieldParams::default(), rng)
    }

    /// Builds an engine over a freshly generated field described by `params`.
    pub fn with_params<I, V>(
        values: I,
        threshold: usize,
        shareholders: usize,
        params: FieldParams,
        mut rng: R,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<BigInt>,
    {
        let values = sorted_values(values);
        validate(&values, threshold, shareholders)?;
        let field = Field::generate(&params, &mut rng)?;
        Ok(Self::assemble(
            values,
            threshold,
            shareholders,
            field,
            params,
            rng,
        ))
    }

    /// Builds an engine over an existing field.
    pub fn with_field<I, V>(
        values: I,
        threshold: usize,
        shareholders: usize,
        field: Field,
        params: FieldParams,
        rng: R,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<BigInt>,
    {
        let values = sorted_values(values);
        validate(&values, threshold, shareholders)?;
        params.validate()?;
        Ok(Self::assemble(
            values,
            threshold,
            shareholders,
            field,
            params,
            rng,
        ))
    }

    fn assemble(
        values: Vec<BigInt>,
        threshold: usize,
        shareholders: usize,
        field: Field,
        params: FieldParams,
        rng: R,
    ) -> Self {
        let domains = partition(&values, field.modulus());
        info!(
            field = %field.modulus(),
            values = values.len(),
            threshold,
            shareholders,
            "Secret sharing ready"
        );
        Self {
            values,
            threshold,
            shareholders,
            field,
            params,
            domains,
            rng,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The secret values in ascending order.
    pub fn values(&self) -> &[BigInt] {
        &self.values
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shareholders(&self) -> usize {
        self.shareholders
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// The partition computed when the engine was built.
    pub fn domains(&self) -> &DomainPartition {
        &self.domains
    }

    /// Recomputes the domain partition. Always equal to [`SecretSharing::domains`].
    pub fn partition_domain(&self) -> DomainPartition {
        partition(&self.values, self.field.modulus())
    }

    /// Draws new shares for every distinct value.
    #[instrument(skip_all, fields(values = self.domains.len()))]
    pub fn build_shares(&mut self) -> Result<BTreeMap<BigInt, ShareSet>> {
        let mut shares = BTreeMap::new();
        for (value, domain) in self.domains.iter() {
            let (_, value_shares) = build_value_shares(
                value,
                domain,
                self.threshold,
                self.shareholders,
                &self.field,
                self.params.max_sampling_attempts,
                &mut self.rng,
            )?;
            shares.insert(value.clone(), value_shares);
        }
        Ok(shares)
    }

    /// Recovers a value from its share set, see [`reconstruct_secret`].
    pub fn reconstruct_secret(&self, shares: &ShareSet) -> Result<BigInt> {
        reconstruct_secret(shares, self.threshold, &self.field)
    }
}

fn sorted_values<I, V>(values: I) -> Vec<BigInt>
where
    I: IntoIterator<Item = V>,
    V: Into<BigInt>,
{
    let mut values: Vec<BigInt> = values.into_iter().map(Into::into).collect();
    values.sort();
    values
}

fn validate(values: &[BigInt], threshold: usize, shareholders: usize) -> Result<()> {
    if values.is_empty() {
        return Err(SharingError::invalid("at least one value is required"));
    }
    if threshold < 1 {
        return Err(SharingError::invalid("threshold must be at least 1"));
    }
    if threshold > shareholders {
        return Err(SharingError::invalid(format!(
            "threshold {threshold} exceeds the number of shareholders {shareholders}"
        )));
    }
    Ok(())
}
