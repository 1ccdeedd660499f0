//! # Privacy Curve
//!
//! Scalar field and group arithmetic for the privacy layer, built on the
//! Ristretto prime-order group from `curve25519-dalek`. It includes:
//!
//! - [`Scalar`]: elements of Z_L (L = the prime group order) with a
//!   canonical 32-byte little-endian encoding
//! - [`Point`]: group elements with a 32-byte compressed encoding
//! - Deterministic hash-to-point and hash-to-scalar maps for
//!   nothing-up-my-sleeve parameter derivation
//!
//! ## Mathematical Background
//!
//! All scalar arithmetic is modulo the prime order L, and all point
//! operations stay inside the prime-order group, so there are no cofactor
//! or small-subgroup concerns. Every operation is a pure function over
//! value types; nothing here performs I/O or holds mutable state.
//!
//! Equality on both types is constant time. Variable-time operations
//! ([`Scalar::cmp_vartime`], [`Scalar::pow_vartime`]) are named as such and
//! must only see public values.

pub mod errors;
pub mod point;
pub mod scalar;

pub use errors::*;
pub use point::*;
pub use scalar::*;

/// Domain-separation tags mixed into hash-to-point derivations so that
/// points derived for different purposes can never collide.
pub mod domain_tags {
    /// Commitment generator derivation
    pub const GENERATOR: &[u8] = b"bulletproof";
    /// Asset-tag blinding point derivation
    pub const ASSET_TAG: &[u8] = b"assettag";
    /// One-time-address derivation
    pub const ONE_TIME_ADDRESS: &[u8] = b"onetimeaddress";
}


/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar as DalekScalar,
};
