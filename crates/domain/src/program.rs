use std::{collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DayID, DeleteError, Level, Name, Property, ReadError, Tag, UpdateError,
    WorkoutDay,
};

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn read_programs(&self, owner: OwnerID) -> Result<Vec<WorkoutProgram>, ReadError>;
    async fn create_program(&self, program: WorkoutProgram)
    -> Result<WorkoutProgram, CreateError>;
    async fn read_active_program(&self, owner: OwnerID)
    -> Result<Option<WorkoutProgram>, ReadError>;
    async fn activate_program(&self, id: ProgramID, owner: OwnerID)
    -> Result<ProgramID, UpdateError>;
    async fn delete_program(&self, id: ProgramID, owner: OwnerID)
    -> Result<ProgramID, DeleteError>;
    async fn read_day(&self, id: DayID) -> Result<WorkoutDay, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn get_programs(&self, owner: OwnerID) -> Result<Vec<WorkoutProgram>, ReadError>;
    async fn create_program(
        &self,
        archetype: &str,
        owner: OwnerID,
    ) -> Result<WorkoutProgram, CreateError>;
    async fn create_deload_program(
        &self,
        archetype: &str,
        owner: OwnerID,
    ) -> Result<WorkoutProgram, CreateError>;
    async fn get_active_program(&self, owner: OwnerID)
    -> Result<Option<WorkoutProgram>, ReadError>;
    async fn activate_program(&self, id: ProgramID, owner: OwnerID)
    -> Result<ProgramID, UpdateError>;
    async fn delete_program(&self, id: ProgramID, owner: OwnerID)
    -> Result<ProgramID, DeleteError>;
    async fn get_day(&self, id: DayID) -> Result<WorkoutDay, ReadError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OwnerID(Uuid);

impl OwnerID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for OwnerID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for OwnerID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramID(Uuid);

impl ProgramID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ProgramID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgramID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
    GeneralFitness,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 5] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Endurance,
            Goal::WeightLoss,
            Goal::GeneralFitness,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Endurance => "Endurance",
            Goal::WeightLoss => "Weight Loss",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
            Goal::WeightLoss => "weight_loss",
            Goal::GeneralFitness => "general_fitness",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Goal::iter()
            .find(|g| g.tag() == value)
            .copied()
            .ok_or_else(|| GoalError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("Unknown goal `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Split {
    PushPullLegs,
    UpperLower,
    FullBody,
    BroSplit,
}

impl Property for Split {
    fn iter() -> Iter<'static, Split> {
        static SPLITS: [Split; 4] = [
            Split::PushPullLegs,
            Split::UpperLower,
            Split::FullBody,
            Split::BroSplit,
        ];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Split::PushPullLegs => "Push Pull Legs",
            Split::UpperLower => "Upper Lower",
            Split::FullBody => "Full Body",
            Split::BroSplit => "Bro Split",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Split::PushPullLegs => "push_pull_legs",
            Split::UpperLower => "upper_lower",
            Split::FullBody => "full_body",
            Split::BroSplit => "bro_split",
        }
    }
}

impl TryFrom<&str> for Split {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Split::iter()
            .find(|s| s.tag() == value)
            .copied()
            .ok_or_else(|| SplitError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("Unknown split `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum DeloadStrategy {
    Volume,
    Intensity,
    Both,
    Frequency,
}

impl Property for DeloadStrategy {
    fn iter() -> Iter<'static, DeloadStrategy> {
        static STRATEGIES: [DeloadStrategy; 4] = [
            DeloadStrategy::Volume,
            DeloadStrategy::Intensity,
            DeloadStrategy::Both,
            DeloadStrategy::Frequency,
        ];
        STRATEGIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DeloadStrategy::Volume => "Volume",
            DeloadStrategy::Intensity => "Intensity",
            DeloadStrategy::Both => "Both",
            DeloadStrategy::Frequency => "Frequency",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            DeloadStrategy::Volume => "volume",
            DeloadStrategy::Intensity => "intensity",
            DeloadStrategy::Both => "both",
            DeloadStrategy::Frequency => "frequency",
        }
    }
}

impl TryFrom<&str> for DeloadStrategy {
    type Error = DeloadStrategyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DeloadStrategy::iter()
            .find(|s| s.tag() == value)
            .copied()
            .ok_or_else(|| DeloadStrategyError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DeloadStrategyError {
    #[error("Unknown deload strategy `{0}`")]
    Unknown(String),
}

/// Deload periodization of a program. Present on programs that schedule a
/// reduced-load week, absent on programs that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deload {
    pub every_weeks: u32,
    pub strategy: DeloadStrategy,
}

/// A complete training program.
///
/// The order of `days` is the rotation order within a microcycle, not a
/// calendar order. Each day is performed once per microcycle, so the weekly
/// frequency equals the number of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutProgram {
    pub id: ProgramID,
    pub owner: OwnerID,
    pub name: Name,
    pub description: String,
    pub tags: BTreeSet<Tag>,
    pub days: Vec<WorkoutDay>,
    pub goal: Goal,
    pub level: Level,
    pub deload: Option<Deload>,
    pub split: Split,
    pub is_active: bool,
}

impl WorkoutProgram {
    #[must_use]
    pub fn frequency(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn includes_deload(&self) -> bool {
        self.deload.is_some()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.days.iter().map(WorkoutDay::num_sets).sum()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<Name> {
        self.days.iter().flat_map(WorkoutDay::exercises).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::build_program;

    use super::*;

    #[test]
    fn test_program_frequency_matches_days() {
        let program = build_program("pure_bodybuilding_ppl", 1.into()).unwrap();
        assert_eq!(program.frequency(), program.days.len());
    }

    #[test]
    fn test_program_exercises_and_sets() {
        let program = build_program("pure_bodybuilding_ppl", 1.into()).unwrap();
        assert_eq!(
            program.num_sets(),
            program.days.iter().map(|d| d.exercise_sets.len()).sum()
        );
        assert!(
            program
                .exercises()
                .contains(&Name::new("Bench Press").unwrap())
        );
    }

    #[test]
    fn test_program_id_nil() {
        assert!(ProgramID::nil().is_nil());
        assert_eq!(ProgramID::nil(), ProgramID::default());
    }
}
