//! Scalar field arithmetic modulo the Ristretto group order

use crate::{CurveError, CurveResult};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

/// An element of the scalar field Z_L, where L is the prime order of the
/// Ristretto group. The canonical encoding is 32 little-endian bytes with
/// value in `[0, L)`.
///
/// Equality via `==` is constant time (it delegates to the underlying
/// field implementation); use [`Scalar::cmp_vartime`] only on public values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(pub(crate) DalekScalar);

impl Scalar {
    /// The additive identity
    pub const ZERO: Scalar = Scalar(DalekScalar::ZERO);

    /// The multiplicative identity
    pub const ONE: Scalar = Scalar(DalekScalar::ONE);

    /// Decode a canonical 32-byte little-endian encoding.
    ///
    /// Fails if the input is not exactly 32 bytes or encodes a value >= L.
    pub fn from_bytes(bytes: &[u8]) -> CurveResult<Self> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| CurveError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })?;
        Option::from(DalekScalar::from_canonical_bytes(array))
            .map(Self)
            .ok_or(CurveError::NonCanonicalScalar)
    }

    /// Interpret 32 arbitrary bytes as a little-endian integer and reduce it
    /// mod L. This is the non-validating path for raw representatives; use
    /// [`Scalar::from_bytes`] when the encoding must already be canonical.
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        Self(DalekScalar::from_bytes_mod_order(bytes))
    }

    /// Hash an arbitrary-length message to a uniformly distributed field
    /// element. Deterministic: identical input always yields an identical
    /// scalar, so this is safe for derivation paths.
    pub fn from_hash(message: &[u8]) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(message);
        Self(DalekScalar::from_hash(hasher))
    }

    /// Sample a uniformly random scalar
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(DalekScalar::random(rng))
    }

    /// Fused multiply-add: `self * b + c`, reduced mod L
    pub fn mul_add(&self, b: &Scalar, c: &Scalar) -> Self {
        Self(self.0 * b.0 + c.0)
    }

    /// Raise to a public `u64` power by square-and-multiply.
    ///
    /// `pow_vartime(0) == ONE` and `pow_vartime(1) == self`. Runs in time
    /// dependent on the exponent, which must therefore not be secret.
    pub fn pow_vartime(&self, exp: u64) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;
        let mut e = exp;
        while e != 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse mod L, computed in constant time.
    ///
    /// Returns [`CurveError::ZeroInversion`] for the zero scalar, which has
    /// no inverse.
    pub fn invert(&self) -> CurveResult<Self> {
        if self.is_zero() {
            return Err(CurveError::ZeroInversion);
        }
        Ok(Self(self.0.invert()))
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO).into()
    }

    /// Whether this is the multiplicative identity
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::ONE).into()
    }

    /// Whether `bytes` is a canonical scalar encoding (32 bytes, value < L)
    pub fn is_canonical(bytes: &[u8; 32]) -> bool {
        DalekScalar::from_canonical_bytes(*bytes).is_some().into()
    }

    /// Variable-time total order over the little-endian integer values.
    ///
    /// Leaks the position of the first differing byte; never call this with
    /// secret scalars. Intended for canonical ordering of public values.
    pub fn cmp_vartime(&self, other: &Scalar) -> Ordering {
        let a = self.0.to_bytes();
        let b = other.0.to_bytes();
        for i in (0..32).rev() {
            match a[i].cmp(&b[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// The canonical 32-byte little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Lowercase hex of the canonical encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from lowercase hex of the canonical encoding
    pub fn from_hex(text: &str) -> CurveResult<Self> {
        let bytes = hex::decode(text)?;
        Self::from_bytes(&bytes)
    }

    /// Access the underlying dalek scalar
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self(DalekScalar::from(value))
    }
}

impl From<DalekScalar> for Scalar {
    fn from(scalar: DalekScalar) -> Self {
        Self(scalar)
    }
}

impl std::ops::Add for Scalar {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Scalar {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul for Scalar {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl std::ops::Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
