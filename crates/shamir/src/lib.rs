// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Domain-split Threshold Secret Sharing
//!
//! Splits a set of integer values into shares so that any `k` of `n` shareholders
//! can recover each value.
//!
//! The field `[0, p)` is partitioned into one domain per value (see [`partition`]),
//! and every coefficient and x-coordinate of a value's polynomial is drawn from its
//! domain. Reconstruction is Lagrange interpolation at zero over the leading `k`
//! shares of a [`ShareSet`].
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use sshare_shamir::SecretSharing;
//!
//! let mut sharing = SecretSharing::new([432, 256, 375, 192], 3, 5, ChaCha20Rng::from_entropy())?;
//! let shares = sharing.build_shares()?;
//! for (value, set) in &shares {
//!     assert_eq!(&sharing.reconstruct_secret(set)?, value);
//! }
//! # Ok::<(), sshare_shamir::SharingError>(())
//! ```

pub mod domain;
pub mod errors;
pub mod reconstruct;
pub mod shares;
pub mod sharing;

pub use domain::{partition, Domain, DomainPartition};
pub use errors::{Result, SharingError};
pub use reconstruct::reconstruct_secret;
pub use shares::{build_value_shares, Share, ShareSet};
pub use sharing::SecretSharing;
