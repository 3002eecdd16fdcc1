use std::collections::BTreeMap;

use crate::{Mechanic, MuscleGroup};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub mechanic: Mechanic,
    pub muscles: &'static [MuscleGroup],
}

#[must_use]
pub fn get(name: &str) -> Option<&'static Exercise> {
    EXERCISES.get(name).copied()
}

pub fn exercises() -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.values().copied()
}

static EXERCISES: std::sync::LazyLock<BTreeMap<&'static str, &'static Exercise>> =
    std::sync::LazyLock::new(|| ENTRIES.iter().map(|e| (e.name, e)).collect());

const ENTRIES: [Exercise; 38] = [
    Exercise {
        name: "Back Squat",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
    },
    Exercise {
        name: "Barbell Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
    },
    Exercise {
        name: "Barbell Row",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
    Exercise {
        name: "Barbell Shrug",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Back],
    },
    Exercise {
        name: "Bench Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    Exercise {
        name: "Cable Crossover",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Chest],
    },
    Exercise {
        name: "Cable Crunch",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Abs],
    },
    Exercise {
        name: "Cable Lateral Raise",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Shoulders],
    },
    Exercise {
        name: "Chest Supported Row",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
    Exercise {
        name: "Deadlift",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    Exercise {
        name: "Dumbbell Lateral Raise",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Shoulders],
    },
    Exercise {
        name: "Face Pull",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
    },
    Exercise {
        name: "Front Squat",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Abs],
    },
    Exercise {
        name: "Hammer Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
    },
    Exercise {
        name: "Hip Thrust",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    Exercise {
        name: "Incline Dumbbell Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Biceps],
    },
    Exercise {
        name: "Incline Dumbbell Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    Exercise {
        name: "Lat Pulldown",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
    Exercise {
        name: "Leg Extension",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Quads],
    },
    Exercise {
        name: "Leg Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
    },
    Exercise {
        name: "Lying Leg Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Hamstrings],
    },
    Exercise {
        name: "Lying Triceps Extension",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Triceps],
    },
    Exercise {
        name: "Machine Chest Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
    },
    Exercise {
        name: "Machine Shoulder Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    Exercise {
        name: "Overhead Cable Triceps Extension",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Triceps],
    },
    Exercise {
        name: "Overhead Press",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    Exercise {
        name: "Pec Deck",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Chest],
    },
    Exercise {
        name: "Preacher Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Biceps],
    },
    Exercise {
        name: "Reverse Pec Deck",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
    },
    Exercise {
        name: "Romanian Deadlift",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::Back],
    },
    Exercise {
        name: "Seated Cable Row",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
    Exercise {
        name: "Seated Calf Raise",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Calves],
    },
    Exercise {
        name: "Seated Leg Curl",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Hamstrings],
    },
    Exercise {
        name: "Standing Calf Raise",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Calves],
    },
    Exercise {
        name: "Triceps Pressdown",
        mechanic: Mechanic::Isolation,
        muscles: &[MuscleGroup::Triceps],
    },
    Exercise {
        name: "Walking Lunge",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
    },
    Exercise {
        name: "Weighted Dip",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    Exercise {
        name: "Weighted Pull Up",
        mechanic: Mechanic::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms],
    },
];
