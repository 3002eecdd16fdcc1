use std::{collections::BTreeSet, slice::Iter};

use chrono::Duration;
use derive_more::Deref;
use uuid::Uuid;

use crate::{ExerciseSetSpec, MuscleGroup, Name, Property, catalog};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Level::iter()
            .find(|l| l.tag() == value)
            .copied()
            .ok_or_else(|| LevelError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("Unknown level `{0}`")]
    Unknown(String),
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayID(Uuid);

impl DayID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for DayID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for DayID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A single training session template.
///
/// The order of `exercise_sets` is the performance order within the session.
/// All sets of one exercise form a contiguous group, as the warmup and
/// technique flags are interpreted relative to that group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub id: DayID,
    pub name: Name,
    pub description: String,
    pub level: Level,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub estimated_minutes: u32,
    pub exercise_sets: Vec<ExerciseSetSpec>,
}

impl WorkoutDay {
    /// Assembles a day from expanded set groups, concatenated in the order
    /// given.
    pub fn new(
        name: Name,
        description: String,
        level: Level,
        muscle_groups: BTreeSet<MuscleGroup>,
        estimated_minutes: u32,
        groups: Vec<Vec<ExerciseSetSpec>>,
    ) -> Result<Self, DayError> {
        Self::with_id(
            Uuid::new_v4().into(),
            name,
            description,
            level,
            muscle_groups,
            estimated_minutes,
            groups.into_iter().flatten().collect(),
        )
    }

    pub fn with_id(
        id: DayID,
        name: Name,
        description: String,
        level: Level,
        muscle_groups: BTreeSet<MuscleGroup>,
        estimated_minutes: u32,
        exercise_sets: Vec<ExerciseSetSpec>,
    ) -> Result<Self, DayError> {
        if exercise_sets.is_empty() {
            return Err(DayError::Empty);
        }

        if muscle_groups.is_empty() {
            return Err(DayError::NoMuscleGroups);
        }

        if estimated_minutes == 0 {
            return Err(DayError::NoDuration);
        }

        let mut seen: BTreeSet<&Name> = BTreeSet::new();
        let mut start = 0;
        while start < exercise_sets.len() {
            let exercise = &exercise_sets[start].exercise;
            if !seen.insert(exercise) {
                return Err(DayError::InterleavedSets(exercise.clone()));
            }
            let mut end = start + 1;
            while end < exercise_sets.len() && exercise_sets[end].exercise == *exercise {
                end += 1;
            }
            for (i, set) in exercise_sets[start..end].iter().enumerate() {
                if set.warmup && i != 0 {
                    return Err(DayError::MisplacedWarmup(exercise.clone()));
                }
                if set.technique.is_some() && i != end - start - 1 {
                    return Err(DayError::MisplacedTechnique(exercise.clone()));
                }
            }
            start = end;
        }

        Ok(Self {
            id,
            name,
            description,
            level,
            muscle_groups,
            estimated_minutes,
            exercise_sets,
        })
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercise_sets.len()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<Name> {
        self.exercise_sets
            .iter()
            .map(|s| s.exercise.clone())
            .collect()
    }

    /// An estimate derived from the prescribed repetitions and rest periods,
    /// assuming 3 s per repetition.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::seconds(
            self.exercise_sets
                .iter()
                .map(|s| i64::from(u32::from(s.target_reps)) * 3 + i64::from(u32::from(s.rest)))
                .sum(),
        )
    }
}

/// The union of the muscle groups trained by the given sets according to the
/// exercise catalog. Exercises unknown to the catalog contribute nothing.
#[must_use]
pub fn muscle_groups(sets: &[ExerciseSetSpec]) -> BTreeSet<MuscleGroup> {
    sets.iter()
        .filter_map(|s| catalog::get(s.exercise.as_ref()))
        .flat_map(|e| e.muscles.iter().copied())
        .collect()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayError {
    #[error("A day must contain at least one exercise set")]
    Empty,
    #[error("A day must target at least one muscle group")]
    NoMuscleGroups,
    #[error("The estimated duration must be positive")]
    NoDuration,
    #[error("The sets of exercise `{0}` are not contiguous")]
    InterleavedSets(Name),
    #[error("Only the first set of exercise `{0}` may be a warmup set")]
    MisplacedWarmup(Name),
    #[error("Only the last set of exercise `{0}` may carry a technique")]
    MisplacedTechnique(Name),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Reps, Rest, Rir, SetPrescription, Technique};

    use super::*;

    fn group(exercise: &str, sets: u32, technique: Option<Technique>) -> Vec<ExerciseSetSpec> {
        SetPrescription {
            exercise: Name::new(exercise).unwrap(),
            alternative: None,
            sets,
            reps: Reps::new(10).unwrap(),
            rir: Rir::new(2).unwrap(),
            rest: Rest::DEFAULT,
            warmup_first: true,
            technique,
            notes: None,
        }
        .expand()
        .unwrap()
    }

    fn day(groups: Vec<Vec<ExerciseSetSpec>>) -> Result<WorkoutDay, DayError> {
        let sets = groups.iter().flatten().cloned().collect::<Vec<_>>();
        WorkoutDay::new(
            Name::new("Push A").unwrap(),
            String::from("Chest-focused pressing"),
            Level::Intermediate,
            muscle_groups(&sets),
            60,
            groups,
        )
    }

    #[test]
    fn test_day_assembly() {
        let day = day(vec![
            group("Bench Press", 3, Some(Technique::RestPause)),
            group("Triceps Pressdown", 2, None),
        ])
        .unwrap();

        assert_eq!(day.num_sets(), 5);
        assert_eq!(
            day.exercises(),
            BTreeSet::from([
                Name::new("Bench Press").unwrap(),
                Name::new("Triceps Pressdown").unwrap()
            ])
        );
        assert_eq!(
            day.muscle_groups,
            BTreeSet::from([
                MuscleGroup::Chest,
                MuscleGroup::Shoulders,
                MuscleGroup::Triceps
            ])
        );
    }

    #[test]
    fn test_day_duration() {
        let day = day(vec![group("Bench Press", 2, None)]).unwrap();
        // 2 sets of 10 reps at 3 s per rep plus 90 s rest each
        assert_eq!(day.duration(), Duration::seconds(240));
    }

    #[test]
    fn test_empty_day_is_rejected() {
        assert_eq!(day(vec![]), Err(DayError::Empty));
    }

    #[test]
    fn test_interleaved_sets_are_rejected() {
        assert_eq!(
            day(vec![
                group("Bench Press", 2, None),
                group("Triceps Pressdown", 2, None),
                group("Bench Press", 1, None),
            ]),
            Err(DayError::InterleavedSets(Name::new("Bench Press").unwrap()))
        );
    }

    #[test]
    fn test_misplaced_technique_is_rejected() {
        let mut sets = group("Bench Press", 3, None);
        sets[1].technique = Some(Technique::DropSet);
        assert_eq!(
            day(vec![sets]),
            Err(DayError::MisplacedTechnique(
                Name::new("Bench Press").unwrap()
            ))
        );
    }

    #[test]
    fn test_misplaced_warmup_is_rejected() {
        let mut sets = group("Bench Press", 3, None);
        sets[2].warmup = true;
        assert_eq!(
            day(vec![sets]),
            Err(DayError::MisplacedWarmup(Name::new("Bench Press").unwrap()))
        );
    }

    #[test]
    fn test_muscle_groups_ignores_unknown_exercises() {
        let sets = group("Zercher Squat", 2, None);
        assert_eq!(muscle_groups(&sets), BTreeSet::new());
    }
}
