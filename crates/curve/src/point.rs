//! Group operations on the Ristretto prime-order group

use crate::{CurveError, CurveResult, Scalar};
use curve25519_dalek::constants::{
    RISTRETTO_BASEPOINT_COMPRESSED, RISTRETTO_BASEPOINT_POINT, RISTRETTO_BASEPOINT_TABLE,
};
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::traits::{Identity, MultiscalarMul};
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use subtle::{Choice, ConstantTimeEq};

/// An element of the Ristretto group, encoded on the wire as 32 compressed
/// bytes. Decoding validates that the bytes describe a group element, so
/// every `Point` is a member of the prime-order group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point(pub(crate) RistrettoPoint);

impl Point {
    /// The neutral element
    pub fn identity() -> Self {
        Self(RistrettoPoint::identity())
    }

    /// Whether this is the neutral element
    pub fn is_identity(&self) -> bool {
        self.ct_eq(&Self::identity()).into()
    }

    /// The standard base point G
    pub fn base() -> Self {
        Self(RISTRETTO_BASEPOINT_POINT)
    }

    /// Fixed-base multiplication `scalar * G` via the precomputed basepoint
    /// table. This is the hot path for public-key derivation.
    pub fn mul_base(scalar: &Scalar) -> Self {
        Self(RISTRETTO_BASEPOINT_TABLE * &scalar.0)
    }

    /// Multi-scalar multiplication: `sum_i scalars[i] * points[i]`, computed
    /// in a single constant-time pass.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length. A mismatch is a broken caller
    /// precondition, not input data to recover from.
    pub fn multiscalar_mul(scalars: &[Scalar], points: &[Point]) -> Self {
        assert_eq!(
            scalars.len(),
            points.len(),
            "multiscalar_mul requires one scalar per point"
        );
        Self(RistrettoPoint::multiscalar_mul(
            scalars.iter().map(|s| s.0),
            points.iter().map(|p| p.0),
        ))
    }

    /// Fused double-base multiplication `a * point_a + b * point_b`.
    ///
    /// Uses a single combined multiscalar pass rather than two independent
    /// scalar multiplications and an addition; this is the hot path for
    /// two-term commitments.
    pub fn double_scalar_mul(a: &Scalar, point_a: &Point, b: &Scalar, point_b: &Point) -> Self {
        Self(RistrettoPoint::multiscalar_mul(
            [a.0, b.0],
            [point_a.0, point_b.0],
        ))
    }

    /// `(1/scalar) * self`; fails for the zero scalar
    pub fn mul_by_inverse(&self, scalar: &Scalar) -> CurveResult<Self> {
        Ok(Self(self.0 * scalar.invert()?.0))
    }

    /// `(1/(a + b)) * self`, the blinding-derived key operation; fails when
    /// `a + b` is zero
    pub fn derive_key(&self, a: &Scalar, b: &Scalar) -> CurveResult<Self> {
        self.mul_by_inverse(&(*a + *b))
    }

    /// Hash arbitrary bytes to a group element (deterministic, one-way).
    ///
    /// The input is expanded with Sha512 and mapped onto the curve with the
    /// Ristretto Elligator map, so the discrete log of the result with
    /// respect to any other point is unknown.
    pub fn hash_to_point(data: &[u8]) -> Self {
        Self(RistrettoPoint::hash_from_bytes::<Sha512>(data))
    }

    /// Derive the `index`-th nothing-up-my-sleeve point for a domain tag.
    ///
    /// The hash input is the exact concatenation
    /// `basepoint bytes || tag bytes || index as 8 little-endian bytes`;
    /// this byte order is part of the wire format and must not change.
    pub fn hash_to_point_with_index(index: u64, tag: &[u8]) -> Self {
        let mut input = Vec::with_capacity(32 + tag.len() + 8);
        input.extend_from_slice(RISTRETTO_BASEPOINT_COMPRESSED.as_bytes());
        input.extend_from_slice(tag);
        input.extend_from_slice(&index.to_le_bytes());
        Self::hash_to_point(&input)
    }

    /// Decode a 32-byte compressed encoding.
    ///
    /// Fails if the input is not exactly 32 bytes or does not decompress to
    /// a valid group element.
    pub fn from_bytes(bytes: &[u8]) -> CurveResult<Self> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| CurveError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })?;
        CompressedRistretto(array)
            .decompress()
            .map(Self)
            .ok_or(CurveError::InvalidPointEncoding)
    }

    /// The 32-byte compressed encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.compress().to_bytes()
    }

    /// Lowercase hex of the compressed encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from lowercase hex of the compressed encoding
    pub fn from_hex(text: &str) -> CurveResult<Self> {
        let bytes = hex::decode(text)?;
        Self::from_bytes(&bytes)
    }

    /// Access the underlying dalek point
    pub fn inner(&self) -> &RistrettoPoint {
        &self.0
    }
}

impl ConstantTimeEq for Point {
    /// Constant time over the compressed encodings; no byte position of a
    /// mismatch is leaked through timing.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .compress()
            .as_bytes()
            .ct_eq(other.0.compress().as_bytes())
    }
}

impl From<RistrettoPoint> for Point {
    fn from(point: RistrettoPoint) -> Self {
        Self(point)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::ops::Mul<Scalar> for Point {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_tags;
    use rand::rngs::OsRng;

    fn random_point() -> Point {
        Point::mul_base(&Scalar::random(&mut OsRng))
    }

    #[test]
    fn test_identity() {
        let id = Point::identity();
        assert!(id.is_identity());
        assert!(!Point::base().is_identity());
        let p = random_point();
        assert_eq!(p + id, p);
    }

    #[test]
    fn test_mul_base_matches_generic_mul() {
        let a = Scalar::random(&mut OsRng);
        assert_eq!(Point::mul_base(&a), Point::base() * a);
        assert_eq!(Point::mul_base(&Scalar::ONE), Point::base());
    }

    #[test]
    fn test_add_sub_inverse() {
        let p = random_point();
        let q = random_point();
        assert_eq!((p + q) - q, p);
        assert!((p - p).is_identity());
        assert_eq!(-p + p, Point::identity());
    }

    #[test]
    fn test_multiscalar_mul_matches_naive() {
        let scalars: Vec<Scalar> = (0..5).map(|_| Scalar::random(&mut OsRng)).collect();
        let points: Vec<Point> = (0..5).map(|_| random_point()).collect();

        let naive = scalars
            .iter()
            .zip(points.iter())
            .map(|(s, p)| *p * *s)
            .fold(Point::identity(), |acc, p| acc + p);

        assert_eq!(Point::multiscalar_mul(&scalars, &points), naive);
    }

    #[test]
    #[should_panic(expected = "one scalar per point")]
    fn test_multiscalar_mul_length_mismatch_panics() {
        let scalars = vec![Scalar::ONE, Scalar::ONE];
        let points = vec![Point::base()];
        Point::multiscalar_mul(&scalars, &points);
    }

    #[test]
    fn test_double_scalar_mul_matches_naive() {
        let a = Scalar::random(&mut OsRng);
        let b = Scalar::random(&mut OsRng);
        let p = random_point();
        let q = random_point();
        assert_eq!(Point::double_scalar_mul(&a, &p, &b, &q), p * a + q * b);
    }

    #[test]
    fn test_mul_by_inverse_round_trip() {
        let a = Scalar::random(&mut OsRng);
        let p = random_point();
        let unblinded = (p * a).mul_by_inverse(&a).unwrap();
        assert_eq!(unblinded, p);
        assert!(p.mul_by_inverse(&Scalar::ZERO).is_err());
    }

    #[test]
    fn test_derive_key() {
        let a = Scalar::from(10u64);
        let b = Scalar::from(32u64);
        let p = random_point();
        let expected = p.mul_by_inverse(&Scalar::from(42u64)).unwrap();
        assert_eq!(p.derive_key(&a, &b).unwrap(), expected);
        assert!(p.derive_key(&a, &(-a)).is_err());
    }

    #[test]
    fn test_from_bytes_errors() {
        assert_eq!(
            Point::from_bytes(&[0u8; 16]),
            Err(CurveError::InvalidLength {
                expected: 32,
                actual: 16
            })
        );
        // all-ones is not a valid Ristretto encoding
        assert_eq!(
            Point::from_bytes(&[0xffu8; 32]),
            Err(CurveError::InvalidPointEncoding)
        );
    }

    #[test]
    fn test_encode_round_trip() {
        let p = random_point();
        assert_eq!(Point::from_bytes(&p.to_bytes()).unwrap(), p);
        assert_eq!(Point::from_hex(&p.to_hex()).unwrap(), p);
    }

    #[test]
    fn test_hash_to_point_deterministic() {
        let p = Point::hash_to_point(b"some input");
        let q = Point::hash_to_point(b"some input");
        let r = Point::hash_to_point(b"other input");
        assert_eq!(p.to_bytes(), q.to_bytes());
        assert_ne!(p, r);
    }

    #[test]
    fn test_hash_to_point_with_index_separates_domains() {
        let a = Point::hash_to_point_with_index(1, domain_tags::GENERATOR);
        let b = Point::hash_to_point_with_index(2, domain_tags::GENERATOR);
        let c = Point::hash_to_point_with_index(1, domain_tags::ASSET_TAG);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Point::hash_to_point_with_index(1, domain_tags::GENERATOR));
    }

    #[test]
    fn test_ct_eq_differing_positions() {
        let p = random_point();
        let q = random_point();
        assert!(bool::from(p.ct_eq(&p)));
        assert!(!bool::from(p.ct_eq(&q)));
        // mismatches at the ends of the encodings behave identically
        let doubled = p + p;
        assert!(!bool::from(p.ct_eq(&doubled)));
    }
}
