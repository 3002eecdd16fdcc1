use std::collections::BTreeSet;

use uuid::Uuid;

use crate::{
    DayError, Deload, DeloadStrategy, Goal, Level, Name, NameError, OwnerID, PrescriptionError,
    Property, Reps, RepsError, Rest, RestError, Rir, RirError, SetPrescription, Split, Tag,
    TagError, Technique, WorkoutDay, WorkoutProgram, catalog, muscle_groups,
};

/// A named program blueprint. Adding an archetype means adding an entry to
/// the registry; the composition logic below is shared by all archetypes.
pub struct Archetype {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub goal: Goal,
    pub level: Level,
    pub split: Split,
    pub tags: &'static [&'static str],
    pub deload: Option<Deload>,
    pub days: &'static [DayTemplate],
    pub deload_days: &'static [DayTemplate],
}

pub struct DayTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub estimated_minutes: u32,
    pub exercises: &'static [ExerciseTemplate],
}

pub struct ExerciseTemplate {
    pub exercise: &'static str,
    pub alternative: Option<&'static str>,
    pub sets: u32,
    pub reps: u32,
    pub rir: u8,
    pub rest: u32,
    pub warmup_first: bool,
    pub technique: Option<Technique>,
    pub notes: Option<&'static str>,
}

impl ExerciseTemplate {
    const fn default() -> Self {
        Self {
            exercise: "",
            alternative: None,
            sets: 3,
            reps: 10,
            rir: 2,
            rest: 90,
            warmup_first: false,
            technique: None,
            notes: None,
        }
    }
}

pub fn archetypes() -> impl Iterator<Item = &'static Archetype> {
    ARCHETYPES.iter().copied()
}

fn archetype(slug: &str) -> Result<&'static Archetype, ComposeError> {
    ARCHETYPES
        .iter()
        .copied()
        .find(|a| a.slug == slug)
        .ok_or_else(|| ComposeError::UnknownArchetype(slug.to_string()))
}

/// Builds the full program of the archetype identified by `slug`.
///
/// Repeated calls produce structurally identical programs with independent
/// identities.
pub fn build_program(slug: &str, owner: OwnerID) -> Result<WorkoutProgram, ComposeError> {
    let archetype = archetype(slug)?;
    Ok(WorkoutProgram {
        id: Uuid::new_v4().into(),
        owner,
        name: Name::new(archetype.name)?,
        description: archetype.description.to_string(),
        tags: tags(archetype, false)?,
        days: build_days(archetype.days)?,
        goal: archetype.goal,
        level: archetype.level,
        deload: archetype.deload,
        split: archetype.split,
        is_active: true,
    })
}

/// Builds the reduced-load companion of the archetype identified by `slug`.
///
/// The deload variant is a sibling program with its own consolidated days,
/// stored independently of the base program and inactive by convention.
pub fn build_deload_variant(slug: &str, owner: OwnerID) -> Result<WorkoutProgram, ComposeError> {
    let archetype = archetype(slug)?;

    if archetype.deload_days.is_empty() {
        return Err(ComposeError::NoDeloadVariant(slug.to_string()));
    }

    Ok(WorkoutProgram {
        id: Uuid::new_v4().into(),
        owner,
        name: Name::new(&format!("{} Deload", archetype.name))?,
        description: format!("Reduced-load variant of {}.", archetype.name),
        tags: tags(archetype, true)?,
        days: build_days(archetype.deload_days)?,
        goal: archetype.goal,
        level: archetype.level,
        deload: None,
        split: archetype.split,
        is_active: false,
    })
}

fn build_days(templates: &[DayTemplate]) -> Result<Vec<WorkoutDay>, ComposeError> {
    templates.iter().map(build_day).collect()
}

fn build_day(template: &DayTemplate) -> Result<WorkoutDay, ComposeError> {
    let mut groups = Vec::with_capacity(template.exercises.len());
    for exercise in template.exercises {
        groups.push(prescription(exercise)?.expand()?);
    }
    let sets = groups.concat();
    Ok(WorkoutDay::new(
        Name::new(template.name)?,
        template.description.to_string(),
        template.level,
        muscle_groups(&sets),
        template.estimated_minutes,
        groups,
    )?)
}

fn prescription(template: &ExerciseTemplate) -> Result<SetPrescription, ComposeError> {
    if catalog::get(template.exercise).is_none() {
        return Err(ComposeError::UnknownExercise(template.exercise.to_string()));
    }

    if let Some(alternative) = template.alternative {
        if catalog::get(alternative).is_none() {
            return Err(ComposeError::UnknownExercise(alternative.to_string()));
        }
    }

    Ok(SetPrescription {
        exercise: Name::new(template.exercise)?,
        alternative: template.alternative.map(Name::new).transpose()?,
        sets: template.sets,
        reps: Reps::new(template.reps)?,
        rir: Rir::new(template.rir)?,
        rest: Rest::new(template.rest)?,
        warmup_first: template.warmup_first,
        technique: template.technique,
        notes: template.notes.map(String::from),
    })
}

fn tags(archetype: &Archetype, deload: bool) -> Result<BTreeSet<Tag>, ComposeError> {
    let mut tags = BTreeSet::from([
        Tag::new(archetype.split.tag())?,
        Tag::new(archetype.goal.tag())?,
        Tag::new(archetype.level.tag())?,
    ]);
    for tag in archetype.tags {
        tags.insert(Tag::new(tag)?);
    }
    if deload {
        tags.insert(Tag::new("deload")?);
    }
    Ok(tags)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ComposeError {
    #[error("Unknown archetype `{0}`")]
    UnknownArchetype(String),
    #[error("Archetype `{0}` has no deload variant")]
    NoDeloadVariant(String),
    #[error("Unknown exercise `{0}`")]
    UnknownExercise(String),
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
    Prescription(#[from] PrescriptionError),
    #[error(transparent)]
    Day(#[from] DayError),
}

static ARCHETYPES: [&Archetype; 2] = [&PURE_BODYBUILDING_PPL, &UPPER_LOWER];

const PURE_BODYBUILDING_PPL: Archetype = Archetype {
    slug: "pure_bodybuilding_ppl",
    name: "Pure Bodybuilding PPL",
    description: "Six-day push/pull/legs rotation with two distinct sessions per movement \
                  pattern and a consolidated deload week.",
    goal: Goal::Hypertrophy,
    level: Level::Advanced,
    split: Split::PushPullLegs,
    tags: &["bodybuilding", "6_days"],
    deload: Some(Deload {
        every_weeks: 5,
        strategy: DeloadStrategy::Both,
    }),
    days: &[
        DayTemplate {
            name: "Push A",
            description: "Chest-focused pressing",
            level: Level::Advanced,
            estimated_minutes: 75,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Bench Press",
                    alternative: Some("Machine Chest Press"),
                    sets: 3,
                    reps: 8,
                    rest: 180,
                    warmup_first: true,
                    notes: Some("Pause briefly on the chest."),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Machine Shoulder Press",
                    alternative: Some("Overhead Press"),
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Cable Crossover",
                    alternative: Some("Pec Deck"),
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Dumbbell Lateral Raise",
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Overhead Cable Triceps Extension",
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Triceps Pressdown",
                    sets: 2,
                    reps: 15,
                    rir: 0,
                    rest: 60,
                    technique: Some(Technique::DropSet),
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Pull A",
            description: "Vertical pulling and arms",
            level: Level::Advanced,
            estimated_minutes: 70,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Weighted Pull Up",
                    alternative: Some("Lat Pulldown"),
                    reps: 8,
                    rest: 180,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Cable Row",
                    alternative: Some("Chest Supported Row"),
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Reverse Pec Deck",
                    alternative: Some("Face Pull"),
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Barbell Curl",
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Hammer Curl",
                    sets: 2,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    technique: Some(Technique::MechanicalSet),
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Legs A",
            description: "Squat-focused lower body",
            level: Level::Advanced,
            estimated_minutes: 80,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Back Squat",
                    alternative: Some("Leg Press"),
                    reps: 6,
                    rest: 240,
                    warmup_first: true,
                    notes: Some("Work up to one heavy top set."),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Romanian Deadlift",
                    reps: 8,
                    rest: 180,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Leg Press",
                    rir: 1,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Leg Curl",
                    reps: 12,
                    rir: 1,
                    technique: Some(Technique::PartialReps),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Standing Calf Raise",
                    sets: 4,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    technique: Some(Technique::PartialReps),
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Push B",
            description: "Shoulder-focused pressing",
            level: Level::Advanced,
            estimated_minutes: 70,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Overhead Press",
                    alternative: Some("Machine Shoulder Press"),
                    reps: 6,
                    rest: 180,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Incline Dumbbell Press",
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Weighted Dip",
                    alternative: Some("Machine Chest Press"),
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Cable Lateral Raise",
                    reps: 15,
                    rir: 0,
                    rest: 60,
                    technique: Some(Technique::DropSet),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lying Triceps Extension",
                    alternative: Some("Overhead Cable Triceps Extension"),
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Pull B",
            description: "Horizontal pulling and arms",
            level: Level::Advanced,
            estimated_minutes: 75,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Barbell Row",
                    alternative: Some("Chest Supported Row"),
                    reps: 8,
                    rest: 180,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lat Pulldown",
                    rir: 1,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Face Pull",
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Barbell Shrug",
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Incline Dumbbell Curl",
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    technique: Some(Technique::RestPause),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Preacher Curl",
                    sets: 2,
                    reps: 15,
                    rir: 0,
                    rest: 60,
                    technique: Some(Technique::DropSet),
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Legs B",
            description: "Hinge-focused lower body",
            level: Level::Advanced,
            estimated_minutes: 85,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Deadlift",
                    reps: 5,
                    rir: 3,
                    rest: 240,
                    warmup_first: true,
                    notes: Some("Reset between repetitions."),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Hip Thrust",
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Walking Lunge",
                    alternative: Some("Leg Press"),
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Leg Extension",
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    technique: Some(Technique::DropSet),
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lying Leg Curl",
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Calf Raise",
                    sets: 4,
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Cable Crunch",
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
    ],
    deload_days: &[
        DayTemplate {
            name: "Deload Push",
            description: "Reduced-load pressing",
            level: Level::Advanced,
            estimated_minutes: 35,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Bench Press",
                    sets: 2,
                    reps: 8,
                    rir: 4,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Machine Shoulder Press",
                    sets: 2,
                    rir: 4,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Triceps Pressdown",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Deload Pull",
            description: "Reduced-load pulling",
            level: Level::Advanced,
            estimated_minutes: 35,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Lat Pulldown",
                    sets: 2,
                    rir: 4,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Cable Row",
                    sets: 2,
                    rir: 4,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Barbell Curl",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Deload Legs",
            description: "Reduced-load lower body",
            level: Level::Advanced,
            estimated_minutes: 35,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Back Squat",
                    sets: 2,
                    reps: 8,
                    rir: 4,
                    rest: 150,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Leg Curl",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Standing Calf Raise",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
    ],
};

const UPPER_LOWER: Archetype = Archetype {
    slug: "upper_lower_4day",
    name: "Upper Lower",
    description: "Four-day upper/lower split balancing heavy compound work with moderate \
                  accessory volume.",
    goal: Goal::Strength,
    level: Level::Intermediate,
    split: Split::UpperLower,
    tags: &["4_days"],
    deload: Some(Deload {
        every_weeks: 6,
        strategy: DeloadStrategy::Volume,
    }),
    days: &[
        DayTemplate {
            name: "Upper A",
            description: "Heavy horizontal pressing and pulling",
            level: Level::Intermediate,
            estimated_minutes: 75,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Bench Press",
                    sets: 4,
                    reps: 5,
                    rest: 240,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Barbell Row",
                    sets: 4,
                    reps: 6,
                    rest: 180,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Overhead Press",
                    reps: 8,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lat Pulldown",
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Barbell Curl",
                    sets: 2,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Triceps Pressdown",
                    sets: 2,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    technique: Some(Technique::RestPause),
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Lower A",
            description: "Squat-focused lower body",
            level: Level::Intermediate,
            estimated_minutes: 70,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Back Squat",
                    sets: 4,
                    reps: 5,
                    rest: 240,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Romanian Deadlift",
                    reps: 8,
                    rest: 180,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Leg Press",
                    rir: 1,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Standing Calf Raise",
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Cable Crunch",
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Upper B",
            description: "Heavy vertical pressing and pulling",
            level: Level::Intermediate,
            estimated_minutes: 75,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Overhead Press",
                    sets: 4,
                    reps: 5,
                    rest: 240,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Weighted Pull Up",
                    alternative: Some("Lat Pulldown"),
                    sets: 4,
                    reps: 6,
                    rest: 180,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Incline Dumbbell Press",
                    rir: 1,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Cable Row",
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Hammer Curl",
                    sets: 2,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lying Triceps Extension",
                    sets: 2,
                    reps: 12,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Lower B",
            description: "Hinge-focused lower body",
            level: Level::Intermediate,
            estimated_minutes: 70,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Deadlift",
                    reps: 5,
                    rest: 240,
                    warmup_first: true,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Front Squat",
                    reps: 8,
                    rest: 180,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Hip Thrust",
                    rir: 1,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lying Leg Curl",
                    reps: 12,
                    rir: 1,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Seated Calf Raise",
                    reps: 15,
                    rir: 1,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
    ],
    deload_days: &[
        DayTemplate {
            name: "Deload Upper",
            description: "Reduced-load upper body",
            level: Level::Intermediate,
            estimated_minutes: 30,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Bench Press",
                    sets: 2,
                    reps: 8,
                    rir: 4,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lat Pulldown",
                    sets: 2,
                    rir: 4,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Overhead Press",
                    sets: 2,
                    reps: 8,
                    rir: 4,
                    ..ExerciseTemplate::default()
                },
            ],
        },
        DayTemplate {
            name: "Deload Lower",
            description: "Reduced-load lower body",
            level: Level::Intermediate,
            estimated_minutes: 30,
            exercises: &[
                ExerciseTemplate {
                    exercise: "Back Squat",
                    sets: 2,
                    reps: 8,
                    rir: 4,
                    rest: 120,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Lying Leg Curl",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
                ExerciseTemplate {
                    exercise: "Standing Calf Raise",
                    sets: 2,
                    reps: 12,
                    rir: 3,
                    rest: 60,
                    ..ExerciseTemplate::default()
                },
            ],
        },
    ],
};
