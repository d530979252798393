//! Unit tests for em-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IndividualId, JobId, NeighbourhoodId};

    #[test]
    fn index_roundtrip() {
        let id = JobId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(JobId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_creation() {
        assert!(IndividualId(0) < IndividualId(1));
    }

    #[test]
    fn neighbourhood_id_rejects_overflow() {
        assert!(NeighbourhoodId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(IndividualId(7).to_string(), "IndividualId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Step};

    #[test]
    fn step_arithmetic() {
        assert_eq!(Step(10) + 5, Step(15));
        assert_eq!(Step(10).offset(3), Step(13));
    }

    #[test]
    fn clock_advances_in_years() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.advance(), Step(1));
        assert_eq!(clock.advance(), Step(2));
        assert!((clock.elapsed_years() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        assert_eq!(clock.to_string(), "S1 (year 0.5)");
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_step() {
        let cfg = SimConfig {
            years_per_step: 0.0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_ages() {
        let cfg = SimConfig {
            max_age: 10.0,
            ..SimConfig::with_seed(3)
        };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
            assert_eq!(r1.normal(0.5, 0.25), r2.normal(0.5, 0.25));
        }
    }

    #[test]
    fn clone_continues_identically() {
        let mut original = SimRng::new(9);
        for _ in 0..17 {
            original.uniform();
        }
        let mut copy = original.clone();
        for _ in 0..50 {
            assert_eq!(original.uniform(), copy.uniform());
        }
    }

    #[test]
    fn uniform_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform_range(1.0, 2.0);
            assert!((1.0..2.0).contains(&v));
        }
    }

    #[test]
    fn normal_mean_is_close() {
        let mut rng = SimRng::new(1);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| rng.normal(0.2, 0.2)).sum::<f64>() / n as f64;
        assert!((mean - 0.2).abs() < 0.01, "got {mean}");
    }

    #[test]
    fn categorical_respects_zero_weights() {
        let mut rng = SimRng::new(5);
        for _ in 0..500 {
            assert_eq!(rng.categorical(&[0.0, 1.0, 0.0]), 1);
        }
    }

    #[test]
    fn categorical_frequencies() {
        let mut rng = SimRng::new(11);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[rng.categorical(&[0.4, 0.3, 0.3])] += 1;
        }
        assert!((3_700..4_300).contains(&counts[0]), "got {counts:?}");
    }
}
