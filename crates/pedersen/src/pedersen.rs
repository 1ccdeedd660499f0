//! Pedersen commitment parameters and commitment entry points

use once_cell::sync::Lazy;
use privacy_curve::{domain_tags, Point, Scalar};
use serde::{Deserialize, Serialize};

/// Number of generator slots in the commitment parameter set
pub const NUM_GENERATORS: usize = 5;

/// Slot committing the spending key
pub const KEY_INDEX: usize = 0;
/// Slot committing the transferred value
pub const VALUE_INDEX: usize = 1;
/// Slot committing the serial-number derivator
pub const SERIAL_NUMBER_INDEX: usize = 2;
/// Slot committing the shard id
pub const SHARD_ID_INDEX: usize = 3;
/// Slot carrying the blinding randomness
pub const RANDOMNESS_INDEX: usize = 4;

static PEDERSEN_PARAMS: Lazy<PedersenParams> = Lazy::new(PedersenParams::derive);

/// The fixed generator set for Pedersen commitments.
///
/// Slot 0 is the standard base point; slots 1..=4 are hash-derived
/// nothing-up-my-sleeve points, so no discrete-log relation between any two
/// generators is known and the commitments are binding. The slot-to-attribute
/// mapping is fixed by the `*_INDEX` constants and shared by all callers.
///
/// The set is derived once per process on first use and is read-only
/// afterwards; concurrent first use is serialized by the lazy initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedersenParams {
    generators: [Point; NUM_GENERATORS],
}

impl PedersenParams {
    fn derive() -> Self {
        let mut generators = [Point::base(); NUM_GENERATORS];
        for (index, generator) in generators.iter_mut().enumerate().skip(1) {
            *generator = Point::hash_to_point_with_index(index as u64, domain_tags::GENERATOR);
        }
        Self { generators }
    }

    /// The process-wide parameter set
    pub fn get() -> &'static PedersenParams {
        &PEDERSEN_PARAMS
    }

    /// All generator slots, in slot order
    pub fn generators(&self) -> &[Point; NUM_GENERATORS] {
        &self.generators
    }

    /// The generator for a slot
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_GENERATORS`.
    pub fn generator(&self, index: usize) -> &Point {
        &self.generators[index]
    }

    /// The value-slot generator, reused directly by other subsystems
    pub fn value_base(&self) -> &Point {
        &self.generators[VALUE_INDEX]
    }

    /// The randomness-slot generator, reused directly by other subsystems
    pub fn randomness_base(&self) -> &Point {
        &self.generators[RANDOMNESS_INDEX]
    }

    /// Commit to a full opening, one scalar per generator slot:
    /// `sum_i openings[i] * generator[i]`.
    ///
    /// The one-opening-per-slot precondition is enforced by the array type.
    pub fn commit_all(&self, openings: &[Scalar; NUM_GENERATORS]) -> Point {
        Point::multiscalar_mul(openings, &self.generators)
    }

    /// Two-term commitment
    /// `value * generator[index] + randomness * generator[RANDOMNESS_INDEX]`,
    /// computed with the fused double-base multiplication.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not an attribute slot (the randomness slot is
    /// reserved); committing to an unknown slot is a broken caller
    /// precondition.
    pub fn commit(&self, value: &Scalar, randomness: &Scalar, index: usize) -> Point {
        assert!(
            index < RANDOMNESS_INDEX,
            "commit requires an attribute slot in 0..{RANDOMNESS_INDEX}, got {index}"
        );
        Point::double_scalar_mul(
            value,
            &self.generators[index],
            randomness,
            &self.generators[RANDOMNESS_INDEX],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use privacy_curve::domain_tags;
    use rand::rngs::OsRng;

    #[test]
    fn test_first_generator_is_base_point() {
        let params = PedersenParams::get();
        assert_eq!(*params.generator(0), Point::mul_base(&Scalar::ONE));
    }

    #[test]
    fn test_generators_are_pairwise_distinct() {
        let generators = PedersenParams::get().generators();
        for i in 0..NUM_GENERATORS {
            for j in (i + 1)..NUM_GENERATORS {
                assert_ne!(generators[i], generators[j]);
            }
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let again = PedersenParams::derive();
        assert_eq!(&again, PedersenParams::get());
        assert_eq!(
            Point::hash_to_point_with_index(1, domain_tags::GENERATOR).to_bytes(),
            Point::hash_to_point_with_index(1, domain_tags::GENERATOR).to_bytes(),
        );
    }

    #[test]
    fn test_named_bases_match_slots() {
        let params = PedersenParams::get();
        assert_eq!(params.value_base(), params.generator(VALUE_INDEX));
        assert_eq!(params.randomness_base(), params.generator(RANDOMNESS_INDEX));
    }

    #[test]
    fn test_commit_all_of_zeros_is_identity() {
        let params = PedersenParams::get();
        assert!(params.commit_all(&[Scalar::ZERO; NUM_GENERATORS]).is_identity());
    }

    #[test]
    fn test_commit_matches_unfused_computation() {
        let params = PedersenParams::get();
        let value = Scalar::from(100u64);
        let randomness = Scalar::from(7u64);

        let commitment = params.commit(&value, &randomness, VALUE_INDEX);
        let expected = *params.generator(VALUE_INDEX) * value
            + *params.generator(RANDOMNESS_INDEX) * randomness;
        assert_eq!(commitment, expected);
    }

    #[test]
    fn test_commit_all_matches_per_slot_commitments() {
        let mut openings = [Scalar::ZERO; NUM_GENERATORS];
        for opening in openings.iter_mut() {
            *opening = Scalar::random(&mut OsRng);
        }

        let params = PedersenParams::get();
        let combined = params.commit_all(&openings);
        let naive = openings
            .iter()
            .zip(params.generators().iter())
            .map(|(o, g)| *g * *o)
            .fold(Point::identity(), |acc, p| acc + p);
        assert_eq!(combined, naive);
    }

    #[test]
    #[should_panic(expected = "attribute slot")]
    fn test_commit_rejects_randomness_slot() {
        let params = PedersenParams::get();
        params.commit(&Scalar::ONE, &Scalar::ONE, RANDOMNESS_INDEX);
    }
}
