//! Labelled discrete distributions (gender, race, job commonality).

use em_core::SimRng;

use crate::{SocietyError, SocietyResult};

/// Tolerance when checking that weights sum to one.
const SUM_TOLERANCE: f64 = 1e-9;

/// An ordered set of labels with probabilities summing to one.
///
/// Label order is significant: it fixes which label each cumulative bucket
/// maps to, and therefore the outcome of a given random draw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Categorical {
    labels:  Vec<String>,
    weights: Vec<f64>,
}

impl Categorical {
    /// Build and validate a distribution named `name` (used in errors only).
    pub fn new<S: Into<String>>(
        name:    &str,
        entries: impl IntoIterator<Item = (S, f64)>,
    ) -> SocietyResult<Self> {
        let (labels, weights): (Vec<String>, Vec<f64>) = entries
            .into_iter()
            .map(|(label, w)| (label.into(), w))
            .unzip();
        if labels.is_empty() {
            return Err(SocietyError::EmptyDistribution(name.to_string()));
        }
        for (label, &w) in labels.iter().zip(&weights) {
            if !(0.0..=1.0).contains(&w) {
                return Err(SocietyError::ProbabilityOutOfRange {
                    name:  format!("{name}.{label}"),
                    value: w,
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(SocietyError::NotNormalised {
                name: name.to_string(),
                sum,
            });
        }
        Ok(Self { labels, weights })
    }

    /// Draw one label index.
    #[inline]
    pub fn sample_index(&self, rng: &mut SimRng) -> usize {
        rng.categorical(&self.weights)
    }

    /// Draw one label.
    pub fn sample<'a>(&'a self, rng: &mut SimRng) -> &'a str {
        &self.labels[self.sample_index(rng)]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
