//! `SimulationCache` — prefix snapshots plus memoized results.

use std::sync::Arc;

use em_core::{SimConfig, Step};
use em_sim::{AggregateData, Intervention, NoopObserver, Sim, SimBuilder, Snapshot};
use em_society::Society;
use tracing::{debug, warn};

use crate::{Action, CacheResult, Lru};

/// (seed, applied action identifiers)
type PrefixKey = (u64, Vec<String>);

// ── Configuration ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Steps simulated before the first action.
    pub warmup_steps: u64,
    /// Steps simulated after each action is scheduled.
    pub steps_per_action: u64,
    /// Snapshots kept before the least recently used one is evicted.
    /// Memoized results are bounded by the same number.
    pub capacity: usize,
    /// Template for every run; its seed is replaced by the requested one.
    pub sim: SimConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            warmup_steps:     100,
            steps_per_action: 10,
            capacity:         64,
            sim:              SimConfig::default(),
        }
    }
}

impl CacheConfig {
    /// The step at which the `index`-th action takes effect.
    pub fn action_step(&self, index: usize) -> Step {
        Step(self.warmup_steps + 1 + self.steps_per_action * index as u64)
    }
}

/// Counters describing how much work the cache has done and saved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// `run` calls answered from the result memo.
    pub result_hits: u64,
    /// `run` calls that resumed from a cached prefix snapshot.
    pub prefix_hits: u64,
    /// `run` calls that had to start from step 0.
    pub cold_starts: u64,
    /// Total simulation steps executed by this cache.
    pub steps_simulated: u64,
}

// ── Cache ────────────────────────────────────────────────────────────────────

/// Snapshots of simulations keyed by seed and the actions applied so far.
pub struct SimulationCache {
    config:    CacheConfig,
    society:   Option<Society>,
    snapshots: Lru<PrefixKey, Snapshot>,
    results:   Lru<PrefixKey, Arc<AggregateData>>,
    stats:     CacheStats,
}

impl SimulationCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            snapshots: Lru::new(config.capacity),
            results:   Lru::new(config.capacity),
            society:   None,
            stats:     CacheStats::default(),
            config,
        }
    }

    /// Use `society` instead of [`Society::standard`] for fresh runs.
    pub fn with_society(mut self, society: Society) -> Self {
        self.society = Some(society);
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of prefix snapshots held.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Number of memoized results held.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn has_prefix(&self, seed: u64, actions: &[&str]) -> bool {
        self.snapshots.contains(&key(seed, actions))
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.results.clear();
    }

    /// Aggregate data for `seed` after warm-up and the given actions.
    ///
    /// Identical arguments yield the same shared result.  Unrecognised
    /// action identifiers are logged and still advance the simulation.
    pub fn run(&mut self, seed: u64, actions: &[&str]) -> CacheResult<Arc<AggregateData>> {
        let full = key(seed, actions);
        if let Some(hit) = self.results.get(&full) {
            debug!(seed, ?actions, "result cache hit");
            self.stats.result_hits += 1;
            return Ok(Arc::clone(hit));
        }

        let (applied, mut sim) = self.resume(seed, actions)?;
        for (i, id) in actions.iter().enumerate().skip(applied) {
            match id.parse::<Action>() {
                Ok(action) => {
                    if let Some(policy) = action.policy() {
                        sim.schedule(Intervention::new(self.config.action_step(i), policy));
                    }
                }
                Err(e) => warn!(seed, error = %e, "treating as no-op"),
            }
            self.advance(&mut sim, self.config.steps_per_action)?;
            self.store_snapshot(key(seed, &actions[..=i]), &sim);
        }

        let data = Arc::new(sim.data());
        self.results.insert(full, Arc::clone(&data));
        Ok(data)
    }

    /// Restore the longest cached prefix of `actions`, or warm up a fresh
    /// simulation.  Returns how many actions the simulation has applied.
    fn resume(&mut self, seed: u64, actions: &[&str]) -> CacheResult<(usize, Sim)> {
        for len in (0..=actions.len()).rev() {
            if let Some(snap) = self.snapshots.get(&key(seed, &actions[..len])) {
                debug!(seed, applied = len, step = %snap.step(), "resuming from cached prefix");
                self.stats.prefix_hits += 1;
                return Ok((len, snap.restore()));
            }
        }

        debug!(seed, warmup = self.config.warmup_steps, "cold start");
        self.stats.cold_starts += 1;
        let mut builder = SimBuilder::new(SimConfig { seed, ..self.config.sim.clone() });
        if let Some(society) = &self.society {
            builder = builder.society(society.clone());
        }
        let mut sim = builder.build()?;
        self.advance(&mut sim, self.config.warmup_steps)?;
        self.store_snapshot(key(seed, &[]), &sim);
        Ok((0, sim))
    }

    fn advance(&mut self, sim: &mut Sim, steps: u64) -> CacheResult<()> {
        sim.run_steps(steps, &mut NoopObserver)?;
        self.stats.steps_simulated += steps;
        Ok(())
    }

    fn store_snapshot(&mut self, key: PrefixKey, sim: &Sim) {
        if let Some((seed, evicted)) = self.snapshots.insert(key, sim.snapshot()) {
            debug!(seed, ?evicted, "evicted snapshot");
        }
    }
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

fn key(seed: u64, actions: &[&str]) -> PrefixKey {
    (seed, actions.iter().map(|a| a.to_string()).collect())
}
