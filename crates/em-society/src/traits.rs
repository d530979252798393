//! Derived binary traits and the conditional-probability trait model.
//!
//! # Conditional tables
//!
//! Each derived trait carries an `overall` rate `p(F)` plus an ordered list of
//! conditions.  A single-factor condition `black` means `p(F | black)`; a
//! compound condition `black+male` means `p(F | black ∧ male)`.
//!
//! When sampling, the conditions that apply to the traits drawn so far are
//! collected.  A compound whose factors are all present replaces those
//! factors in the relevant set, since it is more specific evidence.  Then:
//!
//! - no relevant condition → `overall`;
//! - one relevant condition → that condition's probability, as-is;
//! - several → naive-independence odds combination
//!   `Πp / (Πp + (pF / (1 − pF)) · Π(1 − p))`.
//!
//! The single-condition branch does not go through the combination formula.
//! Both branches are deliberate approximations and are kept separate.

use em_core::SimRng;

use crate::{SocietyError, SocietyResult};

/// Prefix that turns a trait name into its negation token.
pub const NEGATION_PREFIX: &str = "no_";

/// Separator used when parsing compound conditions from text.
const COMPOUND_SEPARATOR: char = '+';

/// Negation token of trait `name`.
pub fn negation(name: &str) -> String {
    format!("{NEGATION_PREFIX}{name}")
}

// ── Condition / ConditionalTable ─────────────────────────────────────────────

/// `p(F | factors…)` for one conjunction of earlier-sampled tokens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub factors:     Vec<String>,
    pub probability: f64,
}

impl Condition {
    /// Parse `"black+male"` style keys into a condition.
    pub fn parse(key: &str, probability: f64) -> Self {
        Self {
            factors: key.split(COMPOUND_SEPARATOR).map(str::to_string).collect(),
            probability,
        }
    }

    #[inline]
    pub fn is_compound(&self) -> bool {
        self.factors.len() > 1
    }

    fn matches(&self, sampled: &[String]) -> bool {
        self.factors.iter().all(|f| sampled.contains(f))
    }
}

/// The unconditional rate of a trait plus its conditional refinements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalTable {
    pub overall:    f64,
    pub conditions: Vec<Condition>,
}

impl ConditionalTable {
    /// A table with no conditions: the trait occurs at `overall` for everyone.
    pub fn unconditional(overall: f64) -> Self {
        Self {
            overall,
            conditions: Vec::new(),
        }
    }

    /// Add a condition parsed from a `a+b` style key.
    pub fn given(mut self, key: &str, probability: f64) -> Self {
        self.conditions.push(Condition::parse(key, probability));
        self
    }

    /// Conditions that apply to `sampled`, with compounds superseding their
    /// own factors.  Singles come first in table order, then compounds.
    fn relevant(&self, sampled: &[String]) -> Vec<&Condition> {
        let mut relevant: Vec<&Condition> = self
            .conditions
            .iter()
            .filter(|c| !c.is_compound() && c.matches(sampled))
            .collect();
        for compound in self.conditions.iter().filter(|c| c.is_compound()) {
            if compound.matches(sampled) {
                relevant.retain(|c| c.is_compound() || !compound.factors.contains(&c.factors[0]));
                relevant.push(compound);
            }
        }
        relevant
    }

    /// Probability of possessing the trait given the tokens sampled so far.
    pub fn probability(&self, sampled: &[String]) -> f64 {
        let relevant = self.relevant(sampled);
        let p_f = self.overall;
        match relevant.as_slice() {
            [] => p_f,
            [only] => only.probability,
            many => {
                let all_positive: f64 = many.iter().map(|c| c.probability).product();
                let all_negative: f64 = many.iter().map(|c| 1.0 - c.probability).product();
                let p = all_positive / (all_positive + (p_f / (1.0 - p_f)) * all_negative);
                if p.is_nan() { p_f } else { p.clamp(0.0, 1.0) }
            }
        }
    }

    fn validate(&self, trait_name: &str, known: &[String]) -> SocietyResult<()> {
        check_probability(trait_name, self.overall)?;
        for c in &self.conditions {
            check_probability(&format!("{trait_name}|{}", c.factors.join("+")), c.probability)?;
            if let Some(f) = c.factors.iter().find(|f| !known.contains(f)) {
                return Err(SocietyError::ForwardReference {
                    trait_name: trait_name.to_string(),
                    factor:     f.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> SocietyResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SocietyError::ProbabilityOutOfRange {
            name: name.to_string(),
            value,
        })
    }
}

// ── TraitDef ──────────────────────────────────────────────────────────────────

/// A named derived trait and its conditional table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitDef {
    pub name:  String,
    pub table: ConditionalTable,
}

impl TraitDef {
    pub fn new(name: impl Into<String>, table: ConditionalTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Draw this trait for someone whose earlier tokens are `sampled`, and
    /// append either the trait or its negation.
    pub fn sample_into(&self, sampled: &mut Vec<String>, rng: &mut SimRng) {
        let p = self.table.probability(sampled);
        if rng.uniform() < p {
            sampled.push(self.name.clone());
        } else {
            sampled.push(negation(&self.name));
        }
    }
}

/// Check that every trait only conditions on tokens drawn before it.
///
/// `base` holds the labels of the categorical draws that precede all derived
/// traits (gender and race).
pub(crate) fn validate_order(base: &[String], traits: &[TraitDef]) -> SocietyResult<()> {
    let mut known = base.to_vec();
    for t in traits {
        t.table.validate(&t.name, &known)?;
        known.push(t.name.clone());
        known.push(negation(&t.name));
    }
    Ok(())
}

// ── TraitSet ──────────────────────────────────────────────────────────────────

/// The trait tokens of one individual, in sampling order.
///
/// For every derived trait exactly one of `name` / `no_name` is present.
/// The only mutation is [`grant`][Self::grant], which swaps a negation for its
/// positive and so preserves that invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitSet {
    tokens: Vec<String>,
}

impl TraitSet {
    pub(crate) fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens that are not negations, in sampling order.
    pub fn positives(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !t.starts_with(NEGATION_PREFIX))
    }

    /// Replace `no_name` with `name`.  Returns `false` if the individual did
    /// not carry the negation.
    pub fn grant(&mut self, name: &str) -> bool {
        let neg = negation(name);
        match self.tokens.iter().position(|t| *t == neg) {
            Some(i) => {
                self.tokens[i] = name.to_string();
                true
            }
            None => false,
        }
    }
}
