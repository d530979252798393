//! `Society` — the shared configuration every entity reads from.

use em_core::{JobKindId, SimRng};

use crate::traits::validate_order;
use crate::{
    Attributes, Categorical, ConditionalTable, Factor, JobKind, SocietyError, SocietyParameter,
    SocietyResult, TraitDef, TraitSet, Weight,
};

/// Trait granted by the diploma intervention and tracked by the diploma-rate
/// statistic.
pub const DIPLOMA_TRAIT: &str = "highschool";

/// Tolerance when checking that job commonalities sum to one.
const SUM_TOLERANCE: f64 = 1e-9;

/// Job kind ids are a `u8`.
pub const MAX_JOB_KINDS: usize = u8::MAX as usize + 1;

/// Demographic distributions, derived traits, job tables and the spatial
/// layout of one simulation.
///
/// Trait order is fixed at construction.  Policy fields (job weights,
/// retention curves, distance penalty scale, proximity bonus) are mutated by
/// interventions through the methods below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Society {
    gender:    Categorical,
    race:      Categorical,
    traits:    Vec<TraitDef>,
    job_kinds: Vec<JobKind>,
    /// Cumulative weights cached from `job_kinds[i].commonality`.
    commonality: Vec<f64>,

    /// Races whose trait weight is set by [`set_racial_discrimination`][Self::set_racial_discrimination].
    pub minority_races: Vec<String>,

    pub distance_penalty_scale: f64,
    pub proximity_bonus:        f64,

    /// Neighbourhoods are laid out on a `neighbourhood_rows × neighbourhood_cols` grid.
    pub neighbourhood_rows: usize,
    pub neighbourhood_cols: usize,
    /// Each neighbourhood holds `cell_rows × cell_cols` placement cells.
    pub cell_rows: usize,
    pub cell_cols: usize,
}

impl Society {
    /// Validate and assemble a society.
    pub fn new(
        gender:    Categorical,
        race:      Categorical,
        traits:    Vec<TraitDef>,
        job_kinds: Vec<JobKind>,
    ) -> SocietyResult<Self> {
        let base: Vec<String> = gender.labels().iter().chain(race.labels()).cloned().collect();
        validate_order(&base, &traits)?;

        if job_kinds.is_empty() {
            return Err(SocietyError::EmptyDistribution("job_commonality".into()));
        }
        if job_kinds.len() > MAX_JOB_KINDS {
            return Err(SocietyError::TooManyJobKinds(job_kinds.len()));
        }
        for kind in &job_kinds {
            kind.validate()?;
            if !(0.0..=1.0).contains(&kind.commonality) {
                return Err(SocietyError::ProbabilityOutOfRange {
                    name:  format!("job_commonality.{}", kind.name),
                    value: kind.commonality,
                });
            }
        }
        let commonality: Vec<f64> = job_kinds.iter().map(|k| k.commonality).collect();
        let sum: f64 = commonality.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(SocietyError::NotNormalised {
                name: "job_commonality".into(),
                sum,
            });
        }

        let society = Self {
            gender,
            race,
            traits,
            job_kinds,
            commonality,
            minority_races:         Vec::new(),
            distance_penalty_scale: 10_000.0,
            proximity_bonus:        5_000.0,
            neighbourhood_rows:     2,
            neighbourhood_cols:     2,
            cell_rows:              7,
            cell_cols:              7,
        };
        society.validate()?;
        Ok(society)
    }

    /// Check the spatial layout.  The layout fields are public, so callers
    /// that edit them after [`new`][Self::new] must validate again before
    /// placing anyone.
    pub fn validate(&self) -> SocietyResult<()> {
        let dims = [
            ("neighbourhood_rows", self.neighbourhood_rows),
            ("neighbourhood_cols", self.neighbourhood_cols),
            ("cell_rows", self.cell_rows),
            ("cell_cols", self.cell_cols),
        ];
        for (name, value) in dims {
            if value == 0 {
                return Err(SocietyError::InvalidLayout(format!("`{name}` must be positive")));
            }
        }
        Ok(())
    }

    /// The reference society: four races, a prison and a high-school trait,
    /// and three job kinds (service, security, trade).
    pub fn standard() -> SocietyResult<Self> {
        let gender = Categorical::new("gender", [("male", 0.5), ("female", 0.5)])?;
        let race = Categorical::new(
            "race",
            [("black", 0.3), ("white", 0.3), ("hispanic", 0.2), ("asian", 0.2)],
        )?;
        let traits = vec![
            TraitDef::new("prison", ConditionalTable::unconditional(0.3)),
            TraitDef::new(DIPLOMA_TRAIT, ConditionalTable::unconditional(0.4)),
        ];
        let kind = |name: &str, commonality, pay: (f64, f64), prod: (f64, f64), hiring, retention: &[f64]| JobKind {
            name:             name.to_string(),
            weights:          Vec::new(),
            commonality,
            starting_pay:     pay.0,
            annual_raise:     pay.1,
            productivity_max: prod.0,
            productivity_tau: prod.1,
            hiring_cost:      hiring,
            retention:        retention.to_vec(),
        };
        let job_kinds = vec![
            kind("service", 0.4, (20_000.0, 1_000.0), (50_000.0, 1.0), 5_000.0, &[0.2, 0.6])
                .weight("highschool", Some(0.5)),
            kind("security", 0.3, (40_000.0, 2_000.0), (80_000.0, 0.5), 20_000.0, &[0.7, 0.8])
                .weight("no_highschool", None)
                .weight("prison", None)
                .weight("experience", Some(0.5)),
            kind("trade", 0.3, (30_000.0, 2_000.0), (60_000.0, 0.5), 30_000.0, &[0.4, 0.8])
                .weight("no_highschool", Some(-0.5))
                .weight("prison", None),
        ];

        let mut society = Society::new(gender, race, traits, job_kinds)?;
        society.minority_races = vec!["black".into(), "hispanic".into(), "asian".into()];
        society.set_racial_discrimination(0.3);
        Ok(society)
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Draw gender, race and every derived trait, in that order.
    pub fn sample_traits(&self, rng: &mut SimRng) -> TraitSet {
        let mut tokens = Vec::with_capacity(2 + self.traits.len());
        tokens.push(self.gender.sample(rng).to_string());
        tokens.push(self.race.sample(rng).to_string());
        for t in &self.traits {
            t.sample_into(&mut tokens, rng);
        }
        TraitSet::from_tokens(tokens)
    }

    /// Draw the continuous attributes of a new individual.
    #[inline]
    pub fn sample_attributes(&self, rng: &mut SimRng) -> Attributes {
        Attributes::sample(rng)
    }

    /// Draw a job kind according to commonality.
    pub fn sample_job_kind(&self, rng: &mut SimRng) -> JobKindId {
        let index = rng.categorical(&self.commonality);
        // `new` caps the kind count at `MAX_JOB_KINDS`.
        JobKindId::try_from(index).unwrap_or(JobKindId(u8::MAX))
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Job kind by id.  Ids come from [`sample_job_kind`][Self::sample_job_kind],
    /// so an out-of-range id is a programming error.
    #[inline]
    pub fn job_kind(&self, id: JobKindId) -> &JobKind {
        &self.job_kinds[id.index()]
    }

    pub fn try_job_kind(&self, id: JobKindId) -> SocietyResult<&JobKind> {
        self.job_kinds.get(id.index()).ok_or(SocietyError::UnknownJobKind(id))
    }

    pub fn job_kinds(&self) -> &[JobKind] {
        &self.job_kinds
    }

    pub fn traits(&self) -> &[TraitDef] {
        &self.traits
    }

    pub fn races(&self) -> &[String] {
        self.race.labels()
    }

    pub fn genders(&self) -> &[String] {
        self.gender.labels()
    }

    pub fn neighbourhood_count(&self) -> usize {
        self.neighbourhood_rows * self.neighbourhood_cols
    }

    // ── Policy mutation ───────────────────────────────────────────────────

    /// Set every minority race's weight to `-value` in every job kind.
    pub fn set_racial_discrimination(&mut self, value: f64) {
        for kind in &mut self.job_kinds {
            for race in &self.minority_races {
                kind.set_weight(Factor::Trait(race.clone()), Weight::Score(-value));
            }
        }
    }

    /// Insert or overwrite one weight of one job kind.
    pub fn set_job_weight(&mut self, kind: JobKindId, factor: Factor, weight: Weight) {
        if let Some(k) = self.job_kinds.get_mut(kind.index()) {
            k.set_weight(factor, weight);
        }
    }

    /// Blend every retention curve 50/50 with `target`.
    pub fn adjust_retention(&mut self, target: f64) {
        for kind in &mut self.job_kinds {
            kind.blend_retention(target);
        }
    }

    /// Overwrite one scalar field.
    pub fn apply_parameter(&mut self, param: SocietyParameter) {
        match param {
            SocietyParameter::DistancePenaltyScale(v) => self.distance_penalty_scale = v,
            SocietyParameter::ProximityBonus(v)       => self.proximity_bonus = v,
        }
    }
}
