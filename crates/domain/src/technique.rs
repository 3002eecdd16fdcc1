use std::slice::Iter;

use derive_more::{Deref, Display};

use crate::{Goal, Mechanic, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Technique {
    DropSet,
    RestPause,
    MechanicalSet,
    PartialReps,
}

impl Technique {
    #[must_use]
    pub fn profile(self) -> &'static AdvancedTechnique {
        match self {
            Technique::DropSet => &DROP_SET,
            Technique::RestPause => &REST_PAUSE,
            Technique::MechanicalSet => &MECHANICAL_SET,
            Technique::PartialReps => &PARTIAL_REPS,
        }
    }
}

impl Property for Technique {
    fn iter() -> Iter<'static, Technique> {
        static TECHNIQUES: [Technique; 4] = [
            Technique::DropSet,
            Technique::RestPause,
            Technique::MechanicalSet,
            Technique::PartialReps,
        ];
        TECHNIQUES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Technique::DropSet => "Drop Set",
            Technique::RestPause => "Rest-Pause",
            Technique::MechanicalSet => "Mechanical Set",
            Technique::PartialReps => "Partial Reps",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Technique::DropSet => "drop_set",
            Technique::RestPause => "rest_pause",
            Technique::MechanicalSet => "mechanical_set",
            Technique::PartialReps => "partial_reps",
        }
    }
}

impl TryFrom<&str> for Technique {
    type Error = TechniqueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Technique::iter()
            .find(|t| t.name() == value || t.tag() == value)
            .copied()
            .ok_or_else(|| TechniqueError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TechniqueError {
    #[error("Unknown technique `{0}`")]
    Unknown(String),
}

#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fatigue(u8);

impl Fatigue {
    pub fn new(value: u8) -> Result<Self, FatigueError> {
        if !(1..=10).contains(&value) {
            return Err(FatigueError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn band(self) -> FatigueBand {
        match self.0 {
            0..=5 => FatigueBand::Low,
            6..=7 => FatigueBand::Medium,
            _ => FatigueBand::High,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FatigueError {
    #[error("Fatigue must be in the range 1 to 10 ({0})")]
    OutOfRange(u8),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum FatigueBand {
    Low,
    Medium,
    High,
}

impl Property for FatigueBand {
    fn iter() -> Iter<'static, FatigueBand> {
        static BANDS: [FatigueBand; 3] =
            [FatigueBand::Low, FatigueBand::Medium, FatigueBand::High];
        BANDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FatigueBand::Low => "Low",
            FatigueBand::Medium => "Medium",
            FatigueBand::High => "High",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            FatigueBand::Low => "low",
            FatigueBand::Medium => "medium",
            FatigueBand::High => "high",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AdvancedTechnique {
    pub technique: Technique,
    pub description: &'static str,
    pub goals: &'static [Goal],
    pub mechanics: &'static [Mechanic],
    pub fatigue_impact: Fatigue,
    pub recovery_requirement: Fatigue,
}

pub fn techniques() -> impl Iterator<Item = &'static AdvancedTechnique> {
    TECHNIQUES.iter().copied()
}

/// Whether attaching a technique to an exercise of the given mechanic suits the
/// given training goal. Purely a lookup into the static rule table.
#[must_use]
pub fn is_applicable(technique: Technique, mechanic: Mechanic, goal: Goal) -> bool {
    matches!(check(technique, mechanic, goal), Applicability::Suited)
}

/// Advisory variant of [`is_applicable`]. An unsuited pairing carries the full
/// rule-table entry so callers can explain the mismatch and still let the user
/// force-select the technique.
#[must_use]
pub fn check(technique: Technique, mechanic: Mechanic, goal: Goal) -> Applicability {
    let profile = technique.profile();
    if profile.mechanics.contains(&mechanic) && profile.goals.contains(&goal) {
        Applicability::Suited
    } else {
        Applicability::Unsuited(profile)
    }
}

pub fn check_by_name(
    name: &str,
    mechanic: Mechanic,
    goal: Goal,
) -> Result<Applicability, TechniqueError> {
    Ok(check(Technique::try_from(name)?, mechanic, goal))
}

#[must_use]
pub fn by_fatigue_band(band: FatigueBand) -> Vec<&'static AdvancedTechnique> {
    TECHNIQUES
        .iter()
        .copied()
        .filter(|t| t.fatigue_impact.band() == band)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Suited,
    Unsuited(&'static AdvancedTechnique),
}

impl Applicability {
    #[must_use]
    pub fn is_suited(&self) -> bool {
        matches!(self, Applicability::Suited)
    }
}

static TECHNIQUES: [&AdvancedTechnique; 4] =
    [&DROP_SET, &REST_PAUSE, &MECHANICAL_SET, &PARTIAL_REPS];

const DROP_SET: AdvancedTechnique = AdvancedTechnique {
    technique: Technique::DropSet,
    description: "Reduce the weight by 20-30 % once the target RIR is reached and continue \
                  repping without rest, up to two times.",
    goals: &[Goal::Hypertrophy],
    mechanics: &[Mechanic::Isolation],
    fatigue_impact: Fatigue(8),
    recovery_requirement: Fatigue(7),
};

const REST_PAUSE: AdvancedTechnique = AdvancedTechnique {
    technique: Technique::RestPause,
    description: "Pause for 15-20 s once the target RIR is reached, then continue with the \
                  same weight for further mini-sets.",
    goals: &[Goal::Hypertrophy, Goal::Strength],
    mechanics: &[Mechanic::Isolation, Mechanic::Compound],
    fatigue_impact: Fatigue(7),
    recovery_requirement: Fatigue(6),
};

const MECHANICAL_SET: AdvancedTechnique = AdvancedTechnique {
    technique: Technique::MechanicalSet,
    description: "Switch to a mechanically easier variation of the movement once the target \
                  RIR is reached and continue without rest.",
    goals: &[Goal::Hypertrophy],
    mechanics: &[Mechanic::Isolation],
    fatigue_impact: Fatigue(6),
    recovery_requirement: Fatigue(5),
};

const PARTIAL_REPS: AdvancedTechnique = AdvancedTechnique {
    technique: Technique::PartialReps,
    description: "Continue with repetitions in the stretched half of the range of motion \
                  once full repetitions are no longer possible at the target RIR.",
    goals: &[Goal::Hypertrophy, Goal::Endurance],
    mechanics: &[Mechanic::Isolation],
    fatigue_impact: Fatigue(5),
    recovery_requirement: Fatigue(4),
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Technique::RestPause, Mechanic::Isolation, Goal::Hypertrophy, true)]
    #[case(Technique::RestPause, Mechanic::Compound, Goal::Strength, true)]
    #[case(Technique::RestPause, Mechanic::Compound, Goal::Endurance, false)]
    #[case(Technique::DropSet, Mechanic::Isolation, Goal::Hypertrophy, true)]
    #[case(Technique::DropSet, Mechanic::Compound, Goal::Hypertrophy, false)]
    #[case(Technique::DropSet, Mechanic::Isolation, Goal::WeightLoss, false)]
    #[case(Technique::MechanicalSet, Mechanic::Isolation, Goal::Hypertrophy, true)]
    #[case(Technique::PartialReps, Mechanic::Isolation, Goal::Endurance, true)]
    #[case(Technique::PartialReps, Mechanic::Compound, Goal::Endurance, false)]
    fn test_is_applicable(
        #[case] technique: Technique,
        #[case] mechanic: Mechanic,
        #[case] goal: Goal,
        #[case] expected: bool,
    ) {
        assert_eq!(is_applicable(technique, mechanic, goal), expected);
        // the rule is a pure function of its arguments
        assert_eq!(is_applicable(technique, mechanic, goal), expected);
        assert_eq!(
            expected,
            technique.profile().mechanics.contains(&mechanic)
                && technique.profile().goals.contains(&goal)
        );
    }

    #[test]
    fn test_check_is_advisory() {
        assert_eq!(
            check(Technique::DropSet, Mechanic::Isolation, Goal::Hypertrophy),
            Applicability::Suited
        );
        let applicability = check(Technique::DropSet, Mechanic::Compound, Goal::Hypertrophy);
        assert!(!applicability.is_suited());
        assert_eq!(applicability, Applicability::Unsuited(&DROP_SET));
    }

    #[rstest]
    #[case("Rest-Pause", Ok(Technique::RestPause))]
    #[case("rest_pause", Ok(Technique::RestPause))]
    #[case("Drop Set", Ok(Technique::DropSet))]
    #[case(
        "nonexistent-technique",
        Err(TechniqueError::Unknown("nonexistent-technique".to_string()))
    )]
    fn test_technique_try_from(
        #[case] name: &str,
        #[case] expected: Result<Technique, TechniqueError>,
    ) {
        assert_eq!(Technique::try_from(name), expected);
    }

    #[test]
    fn test_check_by_name_unknown_technique() {
        assert_eq!(
            check_by_name("nonexistent-technique", Mechanic::Compound, Goal::Strength),
            Err(TechniqueError::Unknown(
                "nonexistent-technique".to_string()
            ))
        );
    }

    #[rstest]
    #[case(FatigueBand::Low, vec![Technique::PartialReps])]
    #[case(FatigueBand::Medium, vec![Technique::RestPause, Technique::MechanicalSet])]
    #[case(FatigueBand::High, vec![Technique::DropSet])]
    fn test_by_fatigue_band(#[case] band: FatigueBand, #[case] expected: Vec<Technique>) {
        assert_eq!(
            by_fatigue_band(band)
                .iter()
                .map(|t| t.technique)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_bands_partition_the_table() {
        let total: usize = FatigueBand::iter()
            .map(|band| by_fatigue_band(*band).len())
            .sum();
        assert_eq!(total, techniques().count());
    }

    #[rstest]
    #[case(1, Ok(Fatigue(1)))]
    #[case(10, Ok(Fatigue(10)))]
    #[case(0, Err(FatigueError::OutOfRange(0)))]
    #[case(11, Err(FatigueError::OutOfRange(11)))]
    fn test_fatigue_new(#[case] value: u8, #[case] expected: Result<Fatigue, FatigueError>) {
        assert_eq!(Fatigue::new(value), expected);
    }
}
