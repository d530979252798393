//! Scheduled policy changes.

use std::fmt;

use em_agent::AgentStore;
use em_core::{SimConfig, SimRng, Step};
use em_society::{DIPLOMA_TRAIT, Society, SocietyParameter, SocietyResult, negation};
use tracing::{debug, info};

/// When a scheduled intervention acts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Only on the trigger step.
    Exact,
    /// On the trigger step and every step after it.
    OnOrAfter,
}

/// What an intervention changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// Blend every job kind's retention curve 50/50 with `target`.
    AdjustRetention { target: f64 },
    /// Overwrite one scalar society field.
    SetParameter(SocietyParameter),
    /// Set the minority-race penalty in every job's weight table.
    SetDiscrimination { penalty: f64 },
    /// Convert a proportion of individuals lacking trait `name` into holders.
    /// On the trigger step the whole population is eligible; afterwards only
    /// newcomers are.
    GrantTrait { name: String, proportion: f64 },
}

impl Policy {
    /// High-school diploma grant for `proportion` of those without one.
    pub fn diploma(proportion: f64) -> Self {
        Policy::GrantTrait {
            name: DIPLOMA_TRAIT.to_string(),
            proportion,
        }
    }

    /// Typed parameter assignment, rejected here if the name or value is
    /// invalid.
    pub fn set_parameter(name: &str, value: f64) -> SocietyResult<Self> {
        SocietyParameter::parse(name, value).map(Policy::SetParameter)
    }

    pub fn trigger(&self) -> Trigger {
        match self {
            Policy::GrantTrait { .. } => Trigger::OnOrAfter,
            _ => Trigger::Exact,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::AdjustRetention { target } => write!(f, "retention toward {target}"),
            Policy::SetParameter(p) => write!(f, "set {p}"),
            Policy::SetDiscrimination { penalty } => write!(f, "discrimination {penalty}"),
            Policy::GrantTrait { name, proportion } => write!(f, "grant {name} to {proportion}"),
        }
    }
}

/// A policy scheduled for a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intervention {
    pub at:     Step,
    pub policy: Policy,
}

impl Intervention {
    pub fn new(at: Step, policy: Policy) -> Self {
        Self { at, policy }
    }

    /// Whether this intervention acts on step `now`.
    pub fn is_due(&self, now: Step) -> bool {
        match self.policy.trigger() {
            Trigger::Exact     => now == self.at,
            Trigger::OnOrAfter => now >= self.at,
        }
    }

    /// Apply the policy for step `now`.  Returns `true` if it acted.
    pub fn apply(
        &self,
        now:     Step,
        society: &mut Society,
        agents:  &mut AgentStore,
        config:  &SimConfig,
        rng:     &mut SimRng,
    ) -> bool {
        if !self.is_due(now) {
            return false;
        }
        match &self.policy {
            Policy::AdjustRetention { target } => society.adjust_retention(*target),
            Policy::SetParameter(param) => society.apply_parameter(*param),
            Policy::SetDiscrimination { penalty } => society.set_racial_discrimination(*penalty),
            Policy::GrantTrait { name, proportion } => {
                // After the trigger step, only people who entered within the
                // last two steps are still eligible.
                let newcomer_age = config.entry_age + 2.0 * config.years_per_step;
                let everyone = now == self.at;
                let mut granted = 0usize;
                for person in agents.individuals_mut() {
                    if !everyone && person.age >= newcomer_age {
                        continue;
                    }
                    if person.traits.contains(&negation(name))
                        && rng.uniform() < *proportion
                    {
                        person.traits.grant(name);
                        granted += 1;
                    }
                }
                debug!(%now, granted, trait_name = %name, "trait grant applied");
                if !everyone {
                    return true;
                }
            }
        }
        info!(%now, policy = %self.policy, "intervention fired");
        true
    }
}
