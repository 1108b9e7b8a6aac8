//! Sharing polynomial implementation.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::Rng;
use sshare_field::Field;
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The random part of a secret-sharing polynomial.
///
/// Holds the coefficients of the degree `1..=k-1` terms in ascending order of
/// degree. The degree-0 term is the secret itself and is never stored, so the
/// same polynomial can be printed or logged without revealing the secret:
/// `f(x) = s + c_1 * x + c_2 * x^2 + ... + c_{k-1} * x^{k-1}`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SharingPolynomial {
    /// Coefficients in ascending order, `coefficients[0]` multiplies `x^1`.
    pub(crate) coefficients: Vec<BigInt>,
}

impl fmt::Display for SharingPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s")?;

        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = i + 1;

            if coeff.is_zero() {
                continue;
            }

            if coeff > &BigInt::zero() {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }

            let abs_coeff = if coeff < &BigInt::zero() {
                -coeff
            } else {
                coeff.clone()
            };

            if !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            write!(f, "x")?;
            if degree > 1 {
                write!(f, "^{degree}")?;
            }
        }

        Ok(())
    }
}

impl SharingPolynomial {
    /// Creates a polynomial from the coefficients of `x^1 .. x^(k-1)`.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Samples the `threshold - 1` coefficients of a fresh polynomial.
    ///
    /// Every coefficient is rejection-sampled from `[lo, hi)` with candidates as
    /// wide as the field, giving up after `max_attempts` draws per coefficient.
    pub fn sample<R: Rng + ?Sized>(
        field: &Field,
        threshold: usize,
        lo: &BigInt,
        hi: &BigInt,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, PolynomialError> {
        if threshold == 0 {
            return Err(PolynomialError::InvalidThreshold { threshold });
        }

        let coefficients = (1..threshold)
            .map(|_| -> Result<BigInt, PolynomialError> {
                let coeff = field.sample_in_range(&mut *rng, lo, hi, max_attempts)?;
                trace!(coefficient = %coeff, "Coefficient");
                Ok(coeff)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { coefficients })
    }

    /// Returns the coefficients in ascending order of degree, starting at `x^1`.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial, `k - 1`.
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of points needed to interpolate the polynomial.
    pub fn threshold(&self) -> usize {
        self.coefficients.len() + 1
    }

    /// Evaluates `secret + Σ c_j * (x^j mod p)`.
    ///
    /// Each power of `x` is reduced modulo the field prime, but neither the
    /// products with the coefficients nor the final sum are. The result is therefore
    /// congruent to `f(x)` modulo `p` without being a reduced field element, which is
    /// the share format consumers of existing share sets expect.
    pub fn evaluate(&self, secret: &BigInt, x: &BigInt, field: &Field) -> BigInt {
        let mut result = secret.clone();
        for (j, coeff) in self.coefficients.iter().enumerate() {
            result += coeff * field.pow(x, j as u64 + 1);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use sshare_field::FieldParams;

    fn field(p: u64) -> Field {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        Field::new(BigInt::from(p), &FieldParams::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let poly = SharingPolynomial::new(vec![BigInt::from(2), BigInt::from(3)]);
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.threshold(), 3);
        assert_eq!(poly.coefficients(), &[BigInt::from(2), BigInt::from(3)]);
    }

    #[test]
    fn test_polynomial_display() {
        let poly = SharingPolynomial::new(vec![BigInt::from(-3), BigInt::from(1), BigInt::from(0)]);
        assert_eq!(poly.to_string(), "s - 3x + x^2");
        assert_eq!(SharingPolynomial::new(vec![]).to_string(), "s");
    }

    #[test]
    fn test_constant_polynomial_evaluates_to_secret() {
        let field = field(101);
        let poly = SharingPolynomial::new(vec![]);
        assert_eq!(
            poly.evaluate(&BigInt::from(42), &BigInt::from(7), &field),
            BigInt::from(42)
        );
    }

    #[test]
    fn test_evaluate_reduces_powers_only() {
        let field = field(11);
        // f(x) = 5 + 20x + 30x^2 at x = 4: powers 4 and 16 mod 11 = 5
        let poly = SharingPolynomial::new(vec![BigInt::from(20), BigInt::from(30)]);
        let y = poly.evaluate(&BigInt::from(5), &BigInt::from(4), &field);
        assert_eq!(y, BigInt::from(5 + 20 * 4 + 30 * 5));
        // congruent to the true value
        assert_eq!(
            field.reduce(&y),
            field.reduce(&BigInt::from(5 + 20 * 4 + 30 * 16))
        );
    }

    #[test]
    fn test_sample_respects_bounds() {
        let field = field(1_000_003);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let lo = BigInt::from(250_000);
        let hi = BigInt::from(500_000);
        let poly = SharingPolynomial::sample(&field, 6, &lo, &hi, 10_000, &mut rng).unwrap();
        assert_eq!(poly.degree(), 5);
        assert!(poly.coefficients().iter().all(|c| c >= &lo && c < &hi));
    }

    #[test]
    fn test_sample_threshold_one_has_no_coefficients() {
        let field = field(101);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let poly = SharingPolynomial::sample(
            &field,
            1,
            &BigInt::from(0),
            &BigInt::from(50),
            10,
            &mut rng,
        )
        .unwrap();
        assert!(poly.coefficients().is_empty());
    }

    #[test]
    fn test_sample_errors() {
        let field = field(101);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(
            SharingPolynomial::sample(&field, 0, &BigInt::from(0), &BigInt::from(50), 10, &mut rng),
            Err(PolynomialError::InvalidThreshold { threshold: 0 })
        );
        assert!(matches!(
            SharingPolynomial::sample(&field, 3, &BigInt::from(50), &BigInt::from(50), 10, &mut rng),
            Err(PolynomialError::Field(_))
        ));
    }

    #[cfg(feature = "bincode")]
    mod serialization_tests {
        use super::*;

        #[test]
        fn test_polynomial_bincode_serialization() {
            let poly = SharingPolynomial::new(vec![BigInt::from(2), BigInt::from(-3)]);
            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let reconstructed: SharingPolynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(poly, reconstructed);
            assert_eq!(poly.to_string(), reconstructed.to_string());
        }
    }
}
