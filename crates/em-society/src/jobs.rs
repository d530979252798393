//! Job kinds: hiring weights and economics.

use crate::{AttributeKind, Attributes, SocietyError, SocietyResult, TraitSet};

/// What a job weight looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Factor {
    /// A trait token such as `highschool`, `no_highschool` or `black`.
    Trait(String),
    /// A continuous attribute, weighted by its value.
    Attribute(AttributeKind),
}

impl Factor {
    /// Attribute names resolve to [`Factor::Attribute`], anything else is a
    /// trait token.
    pub fn parse(key: &str) -> Self {
        match key.parse::<AttributeKind>() {
            Ok(kind) => Factor::Attribute(kind),
            Err(_)   => Factor::Trait(key.to_string()),
        }
    }
}

/// A weight entry: either a score contribution or an absolute disqualifier.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    Score(f64),
    Forbidden,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobWeight {
    pub factor: Factor,
    pub weight: Weight,
}

/// Everything the simulation knows about one category of job.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobKind {
    pub name: String,

    /// Employer-side hiring preferences, evaluated in order.
    pub weights: Vec<JobWeight>,

    /// Relative frequency of this kind among job slots.
    pub commonality: f64,

    /// Annual salary at zero tenure.
    pub starting_pay: f64,

    /// Salary increase per year of tenure.
    pub annual_raise: f64,

    /// Asymptotic annual productivity of a fully trained employee.
    pub productivity_max: f64,

    /// Training time constant in years.
    pub productivity_tau: f64,

    /// One-time cost charged when a slot is filled.
    pub hiring_cost: f64,

    /// Probability of keeping the job through tenure year `i`.  Tenures past
    /// the end use the last entry.
    pub retention: Vec<f64>,
}

impl JobKind {
    /// Builder-style weight insertion; `None` marks the factor as forbidden.
    pub fn weight(mut self, key: &str, weight: Option<f64>) -> Self {
        self.set_weight(Factor::parse(key), weight.map_or(Weight::Forbidden, Weight::Score));
        self
    }

    /// Insert or overwrite the weight for `factor`.
    pub fn set_weight(&mut self, factor: Factor, weight: Weight) {
        match self.weights.iter_mut().find(|w| w.factor == factor) {
            Some(existing) => existing.weight = weight,
            None => self.weights.push(JobWeight { factor, weight }),
        }
    }

    /// Employer-side suitability of an applicant, before interview noise.
    ///
    /// A forbidden trait held by the applicant short-circuits to
    /// `f64::NEG_INFINITY`.
    pub fn suitability(&self, traits: &TraitSet, attributes: &Attributes) -> f64 {
        let mut total = 0.0;
        for w in &self.weights {
            match (&w.factor, w.weight) {
                (Factor::Trait(t), Weight::Forbidden) if traits.contains(t) => {
                    return f64::NEG_INFINITY;
                }
                (Factor::Trait(t), Weight::Score(s)) if traits.contains(t) => total += s,
                (Factor::Attribute(a), Weight::Score(s)) => total += s * attributes.get(*a),
                _ => {}
            }
        }
        total
    }

    /// Annual salary at `tenure` years.
    #[inline]
    pub fn salary(&self, tenure: f64) -> f64 {
        self.starting_pay + tenure * self.annual_raise
    }

    /// Annual productivity at `tenure` years.
    #[inline]
    pub fn productivity(&self, tenure: f64) -> f64 {
        self.productivity_max * (1.0 - (-tenure / self.productivity_tau).exp())
    }

    /// Retention probability for the integer tenure year of `tenure`.
    pub fn retention_at(&self, tenure: f64) -> f64 {
        let year = tenure.max(0.0) as usize;
        self.retention
            .get(year)
            .or_else(|| self.retention.last())
            .copied()
            .unwrap_or(1.0)
    }

    /// Move every retention entry halfway toward `target`.
    pub fn blend_retention(&mut self, target: f64) {
        for r in &mut self.retention {
            *r = 0.5 * (*r + target);
        }
    }

    pub(crate) fn validate(&self) -> SocietyResult<()> {
        if self.retention.is_empty() {
            return Err(SocietyError::EmptyRetention(self.name.clone()));
        }
        if let Some(&r) = self.retention.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            return Err(SocietyError::ProbabilityOutOfRange {
                name:  format!("{}.retention", self.name),
                value: r,
            });
        }
        if self.productivity_tau.is_nan() || self.productivity_tau <= 0.0 {
            return Err(SocietyError::InvalidJobKind {
                name:   self.name.clone(),
                reason: format!("productivity time constant {} must be positive", self.productivity_tau),
            });
        }
        Ok(())
    }
}
