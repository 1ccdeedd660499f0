//! # Privacy Pedersen
//!
//! Additively homomorphic Pedersen commitments over the Ristretto
//! prime-order group, with a fixed five-slot generator set.
//!
//! ## Mathematical Background
//!
//! A two-term commitment to value `v` with randomness `r` at slot `i` is
//!
//! ```text
//! C = v * G_i + r * G_rand
//! ```
//!
//! and a full commitment opens every slot at once:
//!
//! ```text
//! C = sum_i openings[i] * G_i
//! ```
//!
//! Slot 0 holds the standard base point; the remaining generators are
//! derived by hashing a domain tag and the slot index to the curve, so no
//! discrete-log relation between them is known. Commitments are therefore
//! computationally binding, and perfectly hiding for uniform randomness.
//! They are homomorphic per slot:
//!
//! ```text
//! Commit(v1, r1, i) + Commit(v2, r2, i) == Commit(v1 + v2, r1 + r2, i)
//! ```

pub mod pedersen;

pub use pedersen::*;

/// Re-export the value types commitments are built from
pub use privacy_curve::{Point, Scalar};
