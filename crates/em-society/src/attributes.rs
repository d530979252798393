//! Continuous per-individual attributes.

use std::fmt;
use std::str::FromStr;

use em_core::SimRng;

use crate::SocietyError;

/// The continuous attributes a job weight table may refer to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// Base probability of applying to any given vacancy.
    ApplyPropensity,
    /// Multiplier on the society's distance penalty scale.
    DistanceSensitivity,
    /// Mean of the interview noise term.
    InterviewSkill,
    /// Spread of the interview noise term.
    InterviewSpread,
    /// Years spent employed.
    Experience,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 5] = [
        AttributeKind::ApplyPropensity,
        AttributeKind::DistanceSensitivity,
        AttributeKind::InterviewSkill,
        AttributeKind::InterviewSpread,
        AttributeKind::Experience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::ApplyPropensity     => "prob_apply",
            AttributeKind::DistanceSensitivity => "distance_penalty",
            AttributeKind::InterviewSkill      => "interview_skill",
            AttributeKind::InterviewSpread     => "interview_skill_sd",
            AttributeKind::Experience          => "experience",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeKind {
    type Err = SocietyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SocietyError::UnknownParameter(s.to_string()))
    }
}

/// Continuous attributes of one individual.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub apply_propensity:     f64,
    pub distance_sensitivity: f64,
    pub interview_skill:      f64,
    pub interview_spread:     f64,
    pub experience:           f64,
}

impl Attributes {
    /// Draw a fresh attribute set.
    ///
    /// Draw order is part of the random-stream contract.  The first
    /// distance-sensitivity draw from `U(0, 0.5)` is discarded; only the
    /// following `U(1, 2)` draw is kept.
    pub fn sample(rng: &mut SimRng) -> Self {
        let apply_propensity = rng.normal(0.5, 0.25);
        let _ = rng.uniform_range(0.0, 0.5);
        let distance_sensitivity = rng.uniform_range(1.0, 2.0);
        let interview_skill = rng.normal(0.2, 0.2);
        let interview_spread = rng.uniform_range(0.1, 0.4);
        Self {
            apply_propensity,
            distance_sensitivity,
            interview_skill,
            interview_spread,
            experience: 0.0,
        }
    }

    pub fn get(&self, kind: AttributeKind) -> f64 {
        match kind {
            AttributeKind::ApplyPropensity     => self.apply_propensity,
            AttributeKind::DistanceSensitivity => self.distance_sensitivity,
            AttributeKind::InterviewSkill      => self.interview_skill,
            AttributeKind::InterviewSpread     => self.interview_spread,
            AttributeKind::Experience          => self.experience,
        }
    }
}
