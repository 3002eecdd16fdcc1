#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod archetype;
mod day;
mod error;
mod exercise;
mod name;
mod program;
mod service;
mod set;
mod technique;

pub use archetype::{
    Archetype, ComposeError, DayTemplate, ExerciseTemplate, archetypes, build_deload_variant,
    build_program,
};
pub use day::{DayError, DayID, Level, LevelError, WorkoutDay, muscle_groups};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{Mechanic, MechanicError, MuscleGroup, MuscleGroupError};
pub use name::{Name, NameError, Tag, TagError};
pub use program::{
    Deload, DeloadStrategy, DeloadStrategyError, Goal, GoalError, OwnerID, ProgramID,
    ProgramRepository, ProgramService, Split, SplitError, WorkoutProgram,
};
pub use service::Service;
pub use set::{
    ExerciseSetSpec, PrescriptionError, Reps, RepsError, Rest, RestError, Rir, RirError, SetID,
    SetPrescription,
};
pub use technique::{
    AdvancedTechnique, Applicability, Fatigue, FatigueBand, FatigueError, Technique,
    TechniqueError, by_fatigue_band, check, check_by_name, is_applicable, techniques,
};

use std::slice::Iter;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    fn tag(self) -> &'static str;
}
