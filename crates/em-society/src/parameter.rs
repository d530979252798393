//! The closed set of society fields an intervention may overwrite.

use std::fmt;

use crate::{SocietyError, SocietyResult};

/// A typed assignment to one scalar `Society` field.
///
/// Construct through [`SocietyParameter::parse`] (or the variants directly
/// followed by [`validate`][Self::validate]); unknown names and non-finite or
/// negative values are rejected here, never at apply time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SocietyParameter {
    /// Scale applied to each individual's distance sensitivity when applying
    /// to a job outside their neighbourhood.
    DistancePenaltyScale(f64),
    /// Desirability bonus an individual gives to an offer from a local
    /// employer.
    ProximityBonus(f64),
}

impl SocietyParameter {
    pub fn parse(name: &str, value: f64) -> SocietyResult<Self> {
        let param = match name {
            "distance_penalty_scale" => SocietyParameter::DistancePenaltyScale(value),
            "proximity_bonus"        => SocietyParameter::ProximityBonus(value),
            other => return Err(SocietyError::UnknownParameter(other.to_string())),
        };
        param.validate()?;
        Ok(param)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SocietyParameter::DistancePenaltyScale(_) => "distance_penalty_scale",
            SocietyParameter::ProximityBonus(_)       => "proximity_bonus",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            SocietyParameter::DistancePenaltyScale(v) | SocietyParameter::ProximityBonus(v) => v,
        }
    }

    pub fn validate(&self) -> SocietyResult<()> {
        let value = self.value();
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(SocietyError::InvalidParameter {
                name: self.name(),
                value,
            })
        }
    }
}

impl fmt::Display for SocietyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name(), self.value())
    }
}
