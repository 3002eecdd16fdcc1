use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{Name, Technique};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Repetitions held in reserve at the end of a set. Lower means closer to
/// failure.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rir(u8);

impl Rir {
    pub const ZERO: Rir = Rir(0);

    pub fn new(value: u8) -> Result<Self, RirError> {
        if value > 10 {
            return Err(RirError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Rir {
    type Error = RirError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u8>() {
            Ok(parsed_value) => Rir::new(parsed_value),
            Err(_) => Err(RirError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RirError {
    #[error("RIR must be in the range 0 to 10")]
    OutOfRange,
    #[error("RIR must be an integer")]
    ParseError,
}

/// Rest after a set in seconds.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rest(u32);

impl Rest {
    pub const DEFAULT: Rest = Rest(90);

    pub fn new(value: u32) -> Result<Self, RestError> {
        if !(1..=600).contains(&value) {
            return Err(RestError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Rest {
    type Error = RestError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Rest::new(parsed_value),
            Err(_) => Err(RestError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestError {
    #[error("Rest must be in the range 1 to 600 s")]
    OutOfRange,
    #[error("Rest must be an integer")]
    ParseError,
}

/// One planned set of one exercise.
///
/// The id only serves to distinguish sets within a program. It is regenerated
/// on every expansion and carries no meaning beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSetSpec {
    pub id: SetID,
    pub exercise: Name,
    pub alternative: Option<Name>,
    pub target_reps: Reps,
    pub target_rir: Rir,
    pub warmup: bool,
    pub rest: Rest,
    pub technique: Option<Technique>,
    pub notes: Option<String>,
}

/// The parameters from which a contiguous group of sets of one exercise is
/// expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPrescription {
    pub exercise: Name,
    pub alternative: Option<Name>,
    pub sets: u32,
    pub reps: Reps,
    pub rir: Rir,
    pub rest: Rest,
    pub warmup_first: bool,
    pub technique: Option<Technique>,
    pub notes: Option<String>,
}

impl SetPrescription {
    /// Expands the prescription into one [`ExerciseSetSpec`] per set.
    ///
    /// The warmup flag and the notes end up on the first set only, a technique
    /// on the last set only.
    pub fn expand(&self) -> Result<Vec<ExerciseSetSpec>, PrescriptionError> {
        if self.sets == 0 {
            return Err(PrescriptionError::NoSets);
        }

        Ok((0..self.sets)
            .map(|i| ExerciseSetSpec {
                id: Uuid::new_v4().into(),
                exercise: self.exercise.clone(),
                alternative: self.alternative.clone(),
                target_reps: self.reps,
                target_rir: self.rir,
                warmup: self.warmup_first && i == 0,
                rest: self.rest,
                technique: self.technique.filter(|_| i == self.sets - 1),
                notes: self.notes.clone().filter(|_| i == 0),
            })
            .collect())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PrescriptionError {
    #[error("A prescription must contain at least one set")]
    NoSets,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn prescription(sets: u32) -> SetPrescription {
        SetPrescription {
            exercise: Name::new("Bench Press").unwrap(),
            alternative: Some(Name::new("Machine Chest Press").unwrap()),
            sets,
            reps: Reps::new(8).unwrap(),
            rir: Rir::new(2).unwrap(),
            rest: Rest::new(180).unwrap(),
            warmup_first: true,
            technique: Some(Technique::RestPause),
            notes: Some(String::from("Pause briefly on the chest.")),
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(8)]
    fn test_expand_set_count(#[case] sets: u32) {
        assert_eq!(
            prescription(sets).expand().unwrap().len(),
            usize::try_from(sets).unwrap()
        );
    }

    #[test]
    fn test_expand_no_sets() {
        assert_eq!(prescription(0).expand(), Err(PrescriptionError::NoSets));
    }

    #[test]
    fn test_expand_flag_placement() {
        let sets = prescription(4).expand().unwrap();

        assert!(sets[0].warmup);
        assert!(sets[0].notes.is_some());
        assert_eq!(sets[0].technique, None);

        for set in &sets[1..3] {
            assert!(!set.warmup);
            assert_eq!(set.notes, None);
            assert_eq!(set.technique, None);
        }

        assert!(!sets[3].warmup);
        assert_eq!(sets[3].notes, None);
        assert_eq!(sets[3].technique, Some(Technique::RestPause));
    }

    #[test]
    fn test_expand_single_set_carries_all_flags() {
        let sets = prescription(1).expand().unwrap();

        assert!(sets[0].warmup);
        assert!(sets[0].notes.is_some());
        assert_eq!(sets[0].technique, Some(Technique::RestPause));
    }

    #[test]
    fn test_expand_shared_parameters() {
        let prescription = prescription(3);
        for set in prescription.expand().unwrap() {
            assert_eq!(set.exercise, prescription.exercise);
            assert_eq!(set.alternative, prescription.alternative);
            assert_eq!(set.target_reps, prescription.reps);
            assert_eq!(set.target_rir, prescription.rir);
            assert_eq!(set.rest, prescription.rest);
        }
    }

    #[test]
    fn test_expand_generates_fresh_ids() {
        let prescription = prescription(3);
        let first = prescription.expand().unwrap();
        let second = prescription.expand().unwrap();
        let mut ids = first
            .iter()
            .chain(second.iter())
            .map(|s| s.id)
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case("999", Ok(Reps(999)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("eight", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("0", Ok(Rir::ZERO))]
    #[case("10", Ok(Rir(10)))]
    #[case("11", Err(RirError::OutOfRange))]
    #[case("two", Err(RirError::ParseError))]
    fn test_rir_try_from(#[case] value: &str, #[case] expected: Result<Rir, RirError>) {
        assert_eq!(Rir::try_from(value), expected);
    }

    #[rstest]
    #[case("90", Ok(Rest::DEFAULT))]
    #[case("600", Ok(Rest(600)))]
    #[case("0", Err(RestError::OutOfRange))]
    #[case("601", Err(RestError::OutOfRange))]
    #[case("long", Err(RestError::ParseError))]
    fn test_rest_try_from(#[case] value: &str, #[case] expected: Result<Rest, RestError>) {
        assert_eq!(Rest::try_from(value), expected);
    }
}
