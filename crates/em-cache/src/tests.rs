//! Tests for em-cache.

use std::sync::Arc;

use em_core::SimConfig;
use em_sim::{AggregateData, EntityKind};

use crate::{Action, CacheConfig, CacheError, Lru, SimulationCache};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A cache with a short warm-up so tests stay quick.
fn quick_cache(capacity: usize) -> SimulationCache {
    SimulationCache::new(CacheConfig {
        warmup_steps:     20,
        steps_per_action: 5,
        capacity,
        sim:              SimConfig { stats_start_step: em_core::Step(10), ..SimConfig::default() },
    })
}

fn minority_mean(data: &AggregateData, window: std::ops::RangeInclusive<usize>) -> f64 {
    let mut total = 0.0;
    let mut n = 0.0;
    for race in ["black", "hispanic", "asian"] {
        let series = data.series(&format!("employment_{race}")).unwrap();
        for v in &series[window.clone()] {
            total += v;
            n += 1.0;
        }
    }
    total / n
}

// ── Actions ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use super::*;

    #[test]
    fn identifiers_parse_to_their_action() {
        for action in Action::ALL {
            assert_eq!(action.id().parse::<Action>().unwrap(), action);
            assert_eq!(action.to_string(), action.id());
        }
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "teleport".parse::<Action>().unwrap_err();
        assert!(matches!(err, CacheError::UnknownAction(ref s) if s == "teleport"));
    }

    #[test]
    fn only_baseline_has_no_policy() {
        for action in Action::ALL {
            assert_eq!(action.policy().is_none(), action == Action::Baseline, "{action}");
        }
    }

    #[test]
    fn action_steps_follow_warmup() {
        let config = CacheConfig::default();
        assert_eq!(config.action_step(0), em_core::Step(101));
        assert_eq!(config.action_step(3), em_core::Step(131));
    }
}

// ── LRU ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lru_tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut lru = Lru::new(2);
        assert_eq!(lru.insert("a", 1), None);
        assert_eq!(lru.insert("b", 2), None);
        assert_eq!(lru.get("a"), Some(&1));
        assert_eq!(lru.insert("c", 3), Some("b"));
        assert!(lru.contains("a"));
        assert!(!lru.contains("b"));
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn reinsert_replaces_without_growth() {
        let mut lru = Lru::new(2);
        lru.insert("a", 1);
        lru.insert("a", 5);
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.get("a"), Some(&5));
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut lru = Lru::new(0);
        lru.insert(1, ());
        assert_eq!(lru.capacity(), 1);
        assert_eq!(lru.len(), 1);
    }
}

// ── Cache ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn baseline_run_produces_rates() {
        let mut cache = SimulationCache::default();
        let data = cache.run(1, &["init"]).unwrap();

        let black = data.series("employment_black").unwrap();
        assert_eq!(black.len(), 11);
        assert!(black.iter().all(|v| (0.0..=100.0).contains(v)));

        let people = data.grid.iter().filter(|g| g.kind == EntityKind::Person).count();
        assert!(people > 50, "population {people}");
        assert_eq!(cache.stats().cold_starts, 1);
        assert_eq!(cache.stats().steps_simulated, 110);
    }

    #[test]
    fn repeated_run_returns_shared_result() {
        let mut cache = quick_cache(16);
        let first = cache.run(3, &["init", "hs_diploma"]).unwrap();
        let snapshots = cache.snapshot_count();
        let steps = cache.stats().steps_simulated;

        let second = cache.run(3, &["init", "hs_diploma"]).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.snapshot_count(), snapshots);
        assert_eq!(cache.stats().steps_simulated, steps);
        assert_eq!(cache.stats().result_hits, 1);
    }

    #[test]
    fn resumed_prefix_matches_fresh_run() {
        let actions = ["init", "hs_diploma", "retention+"];

        let mut warm = quick_cache(16);
        warm.run(7, &actions[..2]).unwrap();
        let before = warm.stats().steps_simulated;
        let resumed = warm.run(7, &actions).unwrap();
        assert_eq!(warm.stats().prefix_hits, 1);
        assert_eq!(warm.stats().steps_simulated - before, 5);

        let mut cold = quick_cache(16);
        let fresh = cold.run(7, &actions).unwrap();
        assert_eq!(*resumed, *fresh);
    }

    #[test]
    fn seeds_do_not_share_snapshots() {
        let mut cache = quick_cache(16);
        cache.run(1, &["init"]).unwrap();
        cache.run(2, &["init"]).unwrap();
        assert_eq!(cache.stats().cold_starts, 2);
        assert!(cache.has_prefix(1, &["init"]));
        assert!(cache.has_prefix(2, &[]));
    }

    #[test]
    fn unknown_action_advances_without_effect() {
        let mut cache = quick_cache(16);
        let known = cache.run(5, &["init", "init"]).unwrap();
        let unknown = cache.run(5, &["init", "teleport"]).unwrap();
        assert_eq!(*known, *unknown);
    }

    #[test]
    fn snapshots_evicted_beyond_capacity() {
        let mut cache = quick_cache(2);
        cache.run(1, &["init", "init", "init"]).unwrap();
        assert_eq!(cache.snapshot_count(), 2);
        assert!(!cache.has_prefix(1, &[]));
        assert!(cache.has_prefix(1, &["init", "init", "init"]));

        // The evicted warm-up forces a cold start for an unrelated branch.
        cache.run(1, &["mobility+"]).unwrap();
        assert_eq!(cache.stats().cold_starts, 2);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = quick_cache(8);
        cache.run(1, &["init"]).unwrap();
        cache.clear();
        assert_eq!(cache.snapshot_count(), 0);
        assert_eq!(cache.result_count(), 0);
    }

    #[test]
    fn strong_discrimination_lowers_minority_employment() {
        let mut cache = SimulationCache::default();
        let high = ["discriminate-high", "init", "init", "init", "discriminate-low", "init", "init", "init"];
        let base = ["init"; 8];

        let (mut high_phase, mut base_phase, mut recovered) = (0.0, 0.0, 0.0);
        for seed in 1..=3 {
            let h = cache.run(seed, &high).unwrap();
            let b = cache.run(seed, &base).unwrap();
            high_phase += minority_mean(&h, 21..=40);
            base_phase += minority_mean(&b, 21..=40);
            recovered += minority_mean(&h, 61..=80);
        }
        assert!(high_phase < base_phase, "high {high_phase} base {base_phase}");
        assert!(recovered > high_phase, "recovered {recovered} high {high_phase}");
    }
}
