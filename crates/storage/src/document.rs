use robur_domain::{
    DayError, Deload, DeloadStrategy, DeloadStrategyError, ExerciseSetSpec, Goal, GoalError,
    Level, LevelError, MuscleGroup, MuscleGroupError, Name, NameError, Property, Reps, RepsError,
    Rest, RestError, Rir, RirError, Split, SplitError, Tag, TagError, Technique, TechniqueError,
    WorkoutDay, WorkoutProgram,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version of the exchange format. Bump on any incompatible change to the
/// document structs below.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDocument {
    pub schema_version: u32,
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub days: Vec<DayDocument>,
    pub frequency: usize,
    pub goal: String,
    pub level: String,
    pub includes_deload: bool,
    pub deload_frequency_weeks: Option<u32>,
    pub deload_strategy: Option<String>,
    pub split: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDocument {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub level: String,
    pub muscle_groups: Vec<String>,
    pub estimated_minutes: u32,
    pub sets: Vec<SetDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDocument {
    pub id: Uuid,
    pub exercise: String,
    pub alternative: Option<String>,
    pub target_reps: u32,
    pub target_rir: u8,
    pub warmup: bool,
    pub rest: u32,
    pub technique: Option<String>,
    pub notes: Option<String>,
}

impl From<&WorkoutProgram> for ProgramDocument {
    fn from(program: &WorkoutProgram) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            id: *program.id,
            owner: *program.owner,
            name: program.name.to_string(),
            description: program.description.clone(),
            tags: program.tags.iter().map(ToString::to_string).collect(),
            days: program.days.iter().map(DayDocument::from).collect(),
            frequency: program.frequency(),
            goal: program.goal.tag().to_string(),
            level: program.level.tag().to_string(),
            includes_deload: program.includes_deload(),
            deload_frequency_weeks: program.deload.map(|d| d.every_weeks),
            deload_strategy: program.deload.map(|d| d.strategy.tag().to_string()),
            split: program.split.tag().to_string(),
            is_active: program.is_active,
        }
    }
}

impl From<&WorkoutDay> for DayDocument {
    fn from(day: &WorkoutDay) -> Self {
        Self {
            id: *day.id,
            name: day.name.to_string(),
            description: day.description.clone(),
            level: day.level.tag().to_string(),
            muscle_groups: day
                .muscle_groups
                .iter()
                .map(|m| m.tag().to_string())
                .collect(),
            estimated_minutes: day.estimated_minutes,
            sets: day.exercise_sets.iter().map(SetDocument::from).collect(),
        }
    }
}

impl From<&ExerciseSetSpec> for SetDocument {
    fn from(set: &ExerciseSetSpec) -> Self {
        Self {
            id: *set.id,
            exercise: set.exercise.to_string(),
            alternative: set.alternative.as_ref().map(ToString::to_string),
            target_reps: u32::from(set.target_reps),
            target_rir: u8::from(set.target_rir),
            warmup: set.warmup,
            rest: u32::from(set.rest),
            technique: set.technique.map(|t| t.tag().to_string()),
            notes: set.notes.clone(),
        }
    }
}

impl TryFrom<ProgramDocument> for WorkoutProgram {
    type Error = DocumentError;

    fn try_from(document: ProgramDocument) -> Result<Self, Self::Error> {
        if document.schema_version != SCHEMA_VERSION {
            return Err(DocumentError::UnsupportedSchemaVersion(
                document.schema_version,
            ));
        }

        if document.frequency != document.days.len() {
            return Err(DocumentError::FrequencyMismatch {
                frequency: document.frequency,
                days: document.days.len(),
            });
        }

        let deload = match (
            document.includes_deload,
            document.deload_frequency_weeks,
            document.deload_strategy.as_deref(),
        ) {
            (true, Some(every_weeks), Some(strategy)) => {
                if every_weeks == 0 {
                    return Err(DocumentError::InvalidDeloadFrequency);
                }
                Some(Deload {
                    every_weeks,
                    strategy: DeloadStrategy::try_from(strategy)?,
                })
            }
            (false, None, None) => None,
            _ => return Err(DocumentError::InconsistentDeload),
        };

        Ok(WorkoutProgram {
            id: document.id.into(),
            owner: document.owner.into(),
            name: Name::new(&document.name)?,
            description: document.description,
            tags: document
                .tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<_, _>>()?,
            days: document
                .days
                .into_iter()
                .map(WorkoutDay::try_from)
                .collect::<Result<_, _>>()?,
            goal: Goal::try_from(document.goal.as_str())?,
            level: Level::try_from(document.level.as_str())?,
            deload,
            split: Split::try_from(document.split.as_str())?,
            is_active: document.is_active,
        })
    }
}

impl TryFrom<DayDocument> for WorkoutDay {
    type Error = DocumentError;

    fn try_from(document: DayDocument) -> Result<Self, Self::Error> {
        Ok(WorkoutDay::with_id(
            document.id.into(),
            Name::new(&document.name)?,
            document.description,
            Level::try_from(document.level.as_str())?,
            document
                .muscle_groups
                .iter()
                .map(|m| MuscleGroup::try_from(m.as_str()))
                .collect::<Result<_, _>>()?,
            document.estimated_minutes,
            document
                .sets
                .into_iter()
                .map(ExerciseSetSpec::try_from)
                .collect::<Result<_, _>>()?,
        )?)
    }
}

impl TryFrom<SetDocument> for ExerciseSetSpec {
    type Error = DocumentError;

    fn try_from(document: SetDocument) -> Result<Self, Self::Error> {
        Ok(ExerciseSetSpec {
            id: document.id.into(),
            exercise: Name::new(&document.exercise)?,
            alternative: document
                .alternative
                .as_deref()
                .map(Name::new)
                .transpose()?,
            target_reps: Reps::new(document.target_reps)?,
            target_rir: Rir::new(document.target_rir)?,
            warmup: document.warmup,
            rest: Rest::new(document.rest)?,
            technique: document
                .technique
                .as_deref()
                .map(Technique::try_from)
                .transpose()?,
            notes: document.notes,
        })
    }
}

pub fn to_json(program: &WorkoutProgram) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ProgramDocument::from(program))
}

pub fn from_json(json: &str) -> Result<WorkoutProgram, FromJsonError> {
    let document: ProgramDocument = serde_json::from_str(json)?;
    Ok(WorkoutProgram::try_from(document)?)
}

#[derive(thiserror::Error, Debug)]
pub enum FromJsonError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DocumentError {
    #[error("Unsupported schema version {0} (expected {SCHEMA_VERSION})")]
    UnsupportedSchemaVersion(u32),
    #[error("Frequency {frequency} does not match the number of days {days}")]
    FrequencyMismatch { frequency: usize, days: usize },
    #[error("Deload fields are inconsistent")]
    InconsistentDeload,
    #[error("Deload frequency must be positive")]
    InvalidDeloadFrequency,
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Tag(#[from] TagError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Rir(#[from] RirError),
    #[error(transparent)]
    Rest(#[from] RestError),
    #[error(transparent)]
    Day(#[from] DayError),
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    DeloadStrategy(#[from] DeloadStrategyError),
    #[error(transparent)]
    MuscleGroup(#[from] MuscleGroupError),
    #[error(transparent)]
    Technique(#[from] TechniqueError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use robur_domain::build_program;

    use super::*;

    fn program() -> WorkoutProgram {
        build_program("pure_bodybuilding_ppl", 1.into()).unwrap()
    }

    #[test]
    fn test_document_round_trip() {
        let program = program();
        let document = ProgramDocument::from(&program);
        assert_eq!(WorkoutProgram::try_from(document).unwrap(), program);
    }

    #[test]
    fn test_json_round_trip() {
        let program = program();
        let json = to_json(&program).unwrap();
        assert_eq!(from_json(&json).unwrap(), program);
    }

    #[test]
    fn test_unsupported_schema_version() {
        let mut document = ProgramDocument::from(&program());
        document.schema_version = SCHEMA_VERSION + 1;
        assert_eq!(
            WorkoutProgram::try_from(document),
            Err(DocumentError::UnsupportedSchemaVersion(SCHEMA_VERSION + 1))
        );
    }

    #[test]
    fn test_frequency_mismatch() {
        let mut document = ProgramDocument::from(&program());
        document.frequency = 7;
        assert_eq!(
            WorkoutProgram::try_from(document),
            Err(DocumentError::FrequencyMismatch {
                frequency: 7,
                days: 6
            })
        );
    }

    #[test]
    fn test_inconsistent_deload() {
        let mut document = ProgramDocument::from(&program());
        document.deload_strategy = None;
        assert_eq!(
            WorkoutProgram::try_from(document),
            Err(DocumentError::InconsistentDeload)
        );
    }

    #[test]
    fn test_unknown_goal() {
        let mut document = ProgramDocument::from(&program());
        document.goal = String::from("powerbuilding");
        assert_eq!(
            WorkoutProgram::try_from(document),
            Err(DocumentError::Goal(GoalError::Unknown(String::from(
                "powerbuilding"
            ))))
        );
    }

    #[test]
    fn test_unknown_technique() {
        let mut document = ProgramDocument::from(&program());
        document.days[0].sets[0].technique = Some(String::from("cluster_set"));
        assert_eq!(
            WorkoutProgram::try_from(document),
            Err(DocumentError::Technique(TechniqueError::Unknown(
                String::from("cluster_set")
            )))
        );
    }
}
