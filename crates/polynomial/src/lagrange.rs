//! Lagrange interpolation at zero.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use sshare_field::Field;

/// Recovers `f(0)` from the points `(xs[i], ys[i])`.
///
/// Computes `Σ_i y_i * Π_{j≠i} x_j * (x_j - x_i)^-1 mod p` over every given point.
/// The y-coordinates do not need to be reduced. Fewer points than the polynomial's
/// threshold still produce a field element, just not the right one; no points
/// produce zero.
///
/// # Errors
///
/// * `LengthMismatch` when the slices differ in length.
/// * `NonInvertibleElement` when two x-coordinates coincide modulo `p`.
pub fn interpolate_at_zero(
    xs: &[BigInt],
    ys: &[BigInt],
    field: &Field,
) -> Result<BigInt, PolynomialError> {
    if xs.len() != ys.len() {
        return Err(PolynomialError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let mut secret = BigInt::zero();
    for (i, (xi, yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis = BigInt::one();
        for (j, xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            let inverse =
                field
                    .inverse(&(xj - xi))
                    .ok_or_else(|| PolynomialError::NonInvertibleElement {
                        xi: xi.clone(),
                        xj: xj.clone(),
                    })?;
            basis = field.reduce(&(basis * xj * inverse));
        }
        secret += yi * basis;
    }

    Ok(field.reduce(&secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SharingPolynomial;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use sshare_field::FieldParams;

    fn field(p: u64) -> Field {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        Field::new(BigInt::from(p), &FieldParams::default(), &mut rng).unwrap()
    }

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|v| BigInt::from(*v)).collect()
    }

    #[test]
    fn test_interpolates_line() {
        // f(x) = 7 + 3x over GF(101)
        let field = field(101);
        let xs = ints(&[1, 2]);
        let ys = ints(&[10, 13]);
        assert_eq!(interpolate_at_zero(&xs, &ys, &field).unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_interpolates_unreduced_shares() {
        let field = field(1_000_003);
        let poly = SharingPolynomial::new(ints(&[999_999, 123_456, 654_321]));
        let secret = BigInt::from(4242);
        let xs = ints(&[17, 99_999, 500_000, 3]);
        let ys: Vec<BigInt> = xs
            .iter()
            .map(|x| poly.evaluate(&secret, x, &field))
            .collect();
        assert!(ys.iter().any(|y| y >= field.modulus()));
        assert_eq!(interpolate_at_zero(&xs, &ys, &field).unwrap(), secret);
    }

    #[test]
    fn test_too_few_points_still_yields_an_element() {
        let field = field(1_000_003);
        let poly = SharingPolynomial::new(ints(&[5, 6, 7]));
        let secret = BigInt::from(11);
        let xs = ints(&[2, 9]);
        let ys: Vec<BigInt> = xs
            .iter()
            .map(|x| poly.evaluate(&secret, x, &field))
            .collect();
        let value = interpolate_at_zero(&xs, &ys, &field).unwrap();
        assert!(field.contains(&value));
    }

    #[test]
    fn test_empty_points() {
        let field = field(101);
        assert_eq!(
            interpolate_at_zero(&[], &[], &field).unwrap(),
            BigInt::zero()
        );
    }

    #[test]
    fn test_coincident_x_coordinates() {
        let field = field(101);
        let xs = ints(&[5, 5, 8]);
        let ys = ints(&[1, 2, 3]);
        assert_eq!(
            interpolate_at_zero(&xs, &ys, &field),
            Err(PolynomialError::NonInvertibleElement {
                xi: BigInt::from(5),
                xj: BigInt::from(5)
            })
        );
        // congruent modulo p is just as bad
        let xs = ints(&[5, 106]);
        assert!(matches!(
            interpolate_at_zero(&xs, &ints(&[1, 2]), &field),
            Err(PolynomialError::NonInvertibleElement { .. })
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let field = field(101);
        assert_eq!(
            interpolate_at_zero(&ints(&[1, 2]), &ints(&[1]), &field),
            Err(PolynomialError::LengthMismatch { xs: 2, ys: 1 })
        );
    }
}
