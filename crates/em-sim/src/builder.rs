//! Fluent builder for constructing a [`Sim`].

use em_agent::AgentStoreBuilder;
use em_core::{SimConfig, SimRng};
use em_market::LaborMarket;
use em_society::Society;

use crate::{Sim, SimResult, Statistics};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `.society(s)`   | `Society::standard()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::with_seed(7))
///     .society(my_society)
///     .build()?;
/// sim.run_steps(100, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    society: Option<Society>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            society: None,
        }
    }

    /// Use a custom society instead of the standard one.
    pub fn society(mut self, society: Society) -> Self {
        self.society = Some(society);
        self
    }

    /// Validate inputs, create the employers and return a `Sim` at step 0.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let society = match self.society {
            Some(s) => s,
            None => Society::standard()?,
        };
        society.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let agents = AgentStoreBuilder::new(&society)
            .employers(self.config.employer_count)
            .jobs_per_employer(self.config.jobs_per_employer)
            .build(&mut rng);

        Ok(Sim {
            clock: self.config.make_clock(),
            stats: Statistics::new(&society),
            market: LaborMarket::new(self.config.matching_rounds),
            config: self.config,
            society,
            agents,
            rng,
            interventions: Vec::new(),
        })
    }
}
