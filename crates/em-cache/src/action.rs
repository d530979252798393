//! Policy actions a caller can request by name.

use std::fmt;
use std::str::FromStr;

use em_sim::Policy;
use em_society::SocietyParameter;

use crate::CacheError;

/// The recognised action identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// `init`: marks a baseline segment; changes nothing.
    Baseline,
    /// `hs_diploma`: everyone without a diploma gets one, now and on entry.
    Diploma,
    /// `mobility+`: distance no longer discourages applications.
    MobilityUp,
    /// `mobility-`: restore the default distance penalty.
    MobilityDown,
    /// `discriminate-normal`: minority penalty 0.3.
    DiscriminateNormal,
    /// `discriminate-high`: minority penalty 2.0.
    DiscriminateHigh,
    /// `discriminate-low`: no minority penalty.
    DiscriminateLow,
    /// `retention+`: retention curves halfway toward 1.
    RetentionUp,
    /// `retention-`: retention curves halfway toward 0.
    RetentionDown,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Baseline,
        Action::Diploma,
        Action::MobilityUp,
        Action::MobilityDown,
        Action::DiscriminateNormal,
        Action::DiscriminateHigh,
        Action::DiscriminateLow,
        Action::RetentionUp,
        Action::RetentionDown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Action::Baseline           => "init",
            Action::Diploma            => "hs_diploma",
            Action::MobilityUp         => "mobility+",
            Action::MobilityDown       => "mobility-",
            Action::DiscriminateNormal => "discriminate-normal",
            Action::DiscriminateHigh   => "discriminate-high",
            Action::DiscriminateLow    => "discriminate-low",
            Action::RetentionUp        => "retention+",
            Action::RetentionDown      => "retention-",
        }
    }

    /// The policy this action schedules, or `None` for the baseline marker.
    pub fn policy(self) -> Option<Policy> {
        let policy = match self {
            Action::Baseline           => return None,
            Action::Diploma            => Policy::diploma(1.0),
            Action::MobilityUp         => Policy::SetParameter(SocietyParameter::DistancePenaltyScale(0.0)),
            Action::MobilityDown       => Policy::SetParameter(SocietyParameter::DistancePenaltyScale(10_000.0)),
            Action::DiscriminateNormal => Policy::SetDiscrimination { penalty: 0.3 },
            Action::DiscriminateHigh   => Policy::SetDiscrimination { penalty: 2.0 },
            Action::DiscriminateLow    => Policy::SetDiscrimination { penalty: 0.0 },
            Action::RetentionUp        => Policy::AdjustRetention { target: 1.0 },
            Action::RetentionDown      => Policy::AdjustRetention { target: 0.0 },
        };
        Some(policy)
    }
}

impl FromStr for Action {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| CacheError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
