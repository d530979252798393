//! Aggregate time series collected while the simulation runs.

use std::collections::BTreeMap;

use em_agent::AgentStore;
use em_core::Step;
use em_society::{DIPLOMA_TRAIT, Society};

use crate::GridItem;

pub const EMPLOYMENT: &str = "employment";
pub const EMPLOYER_NET: &str = "employer_net";

/// Named time series, one value per recorded step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    series: BTreeMap<String, Vec<f64>>,
}

/// Everything a caller gets back from a run: the time series plus a spatial
/// snapshot of the final state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateData {
    pub series: BTreeMap<String, Vec<f64>>,
    pub grid:   Vec<GridItem>,
}

impl AggregateData {
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }
}

impl Statistics {
    /// Create empty series for every metric the society defines.
    pub fn new(society: &Society) -> Self {
        let mut series = BTreeMap::new();
        for name in [EMPLOYMENT, EMPLOYER_NET, DIPLOMA_TRAIT] {
            series.insert(name.to_string(), Vec::new());
        }
        for race in society.races() {
            series.insert(employment_key(race), Vec::new());
            series.insert(proportion_key(race), Vec::new());
        }
        Self { series }
    }

    /// Append one sample of every metric if `step` has reached `start`.
    ///
    /// Rates are percentages; employer net is the sum of last-step nets in
    /// thousands.  A rate over an empty group is recorded as zero.
    pub fn record(&mut self, step: Step, start: Step, agents: &AgentStore, society: &Society) {
        if step < start {
            return;
        }
        let population = agents.population();
        let employed = agents.individuals().filter(|p| p.is_employed()).count();
        let net: f64 = agents.employers.iter().map(|e| e.last_step.net).sum();
        let diploma = agents.individuals().filter(|p| p.has(DIPLOMA_TRAIT)).count();

        self.push(EMPLOYMENT, ratio(employed, population) * 100.0);
        self.push(EMPLOYER_NET, net * 0.001);
        self.push(DIPLOMA_TRAIT, ratio(diploma, population) * 100.0);
        for race in society.races() {
            let members = agents.individuals().filter(|p| p.has(race));
            let (total, working) = members.fold((0, 0), |(t, w), p| {
                (t + 1, w + usize::from(p.is_employed()))
            });
            self.push(&employment_key(race), ratio(working, total) * 100.0);
            self.push(&proportion_key(race), ratio(total, population) * 100.0);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn series(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.series
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.series.get(EMPLOYMENT).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, name: &str, value: f64) {
        self.series.entry(name.to_string()).or_default().push(value);
    }
}

pub fn employment_key(race: &str) -> String {
    format!("employment_{race}")
}

pub fn proportion_key(race: &str) -> String {
    format!("proportion_{race}")
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}
