//! Unit tests for em-agent.

use em_core::{IndividualId, JobId, NeighbourhoodId, SimRng};
use em_society::Society;

use crate::{AgentStore, AgentStoreBuilder};

fn small_store(rng: &mut SimRng) -> (Society, AgentStore) {
    let society = Society::standard().unwrap();
    let store = AgentStoreBuilder::new(&society)
        .employers(2)
        .jobs_per_employer(3)
        .build(rng);
    (society, store)
}

#[cfg(test)]
mod neighbourhood {
    use super::*;
    use crate::{Cell, LocationPool, Neighbourhood, Placement};

    #[test]
    fn allocates_each_cell_once() {
        let mut rng = SimRng::new(1);
        let mut hood = Neighbourhood::new(NeighbourhoodId(0), 3, 3);
        let mut seen = Vec::new();
        while let Some(cell) = hood.allocate(&mut rng) {
            assert!(!seen.contains(&cell));
            seen.push(cell);
        }
        assert_eq!(seen.len(), 9);
        assert_eq!(hood.free_count(), 0);
    }

    #[test]
    fn release_returns_cell() {
        let mut rng = SimRng::new(2);
        let mut hood = Neighbourhood::new(NeighbourhoodId(0), 2, 2);
        let cell = hood.allocate(&mut rng).unwrap();
        assert_eq!(hood.free_count(), 3);
        hood.release(cell);
        assert_eq!(hood.free_count(), 4);
    }

    #[test]
    fn full_pool_degrades_to_unpooled_origin() {
        let society = Society::standard().unwrap();
        let mut pool = LocationPool::from_society(&society);
        let mut rng = SimRng::new(3);
        let capacity: usize = pool.neighbourhoods.iter().map(Neighbourhood::capacity).sum();
        let mut fallbacks = 0;
        for _ in 0..capacity + 400 {
            let p = pool.place(&mut rng);
            if !p.pooled {
                assert_eq!(p.cell, Cell::default());
                assert!(!pool.release(p));
                fallbacks += 1;
            }
        }
        assert!(fallbacks >= 400);
        assert_eq!(pool.free_cells(), 0);
    }

    #[test]
    fn grid_position_offsets_by_block() {
        let society = Society::standard().unwrap();
        let pool = LocationPool::from_society(&society);
        let p = Placement {
            neighbourhood: NeighbourhoodId(3),
            cell:          Cell { col: 2, row: 5 },
            pooled:        true,
        };
        // Neighbourhood 3 sits at block (1, 1) of a 2×2 grid of 7×7 blocks.
        assert_eq!(pool.grid_position(p), (9, 12));
    }
}

#[cfg(test)]
mod store {
    use super::*;
    use crate::AgentError;

    #[test]
    fn builder_creates_roster() {
        let mut rng = SimRng::new(4);
        let (_, store) = small_store(&mut rng);
        assert_eq!(store.employers.len(), 2);
        assert_eq!(store.jobs().len(), 6);
        assert_eq!(store.employers[1].jobs, vec![JobId(3), JobId(4), JobId(5)]);
        assert_eq!(store.open_jobs().len(), 6);
        assert_eq!(store.locations.free_cells(), 4 * 49 - 2);
    }

    #[test]
    fn spawn_assigns_monotonic_ids() {
        let mut rng = SimRng::new(5);
        let (society, mut store) = small_store(&mut rng);
        let a = store.spawn(&society, 16.0, &mut rng);
        let b = store.spawn(&society, 16.0, &mut rng);
        assert!(a < b);
        store.remove(a).unwrap();
        let c = store.spawn(&society, 16.0, &mut rng);
        assert!(c > b, "ids are never reused");
        let order: Vec<IndividualId> = store.individuals().map(|p| p.id).collect();
        assert_eq!(order, vec![b, c]);
    }

    #[test]
    fn hire_and_fire_keep_both_sides_in_sync() {
        let mut rng = SimRng::new(6);
        let (society, mut store) = small_store(&mut rng);
        let p = store.spawn(&society, 16.0, &mut rng);
        store.hire(p, JobId(2)).unwrap();
        assert_eq!(store.job(JobId(2)).unwrap().employee, Some(p));
        assert_eq!(store.individual(p).unwrap().job, Some(JobId(2)));
        store.check_consistency().unwrap();

        assert_eq!(store.fire(p).unwrap(), JobId(2));
        assert!(store.job(JobId(2)).unwrap().is_vacant());
        assert_eq!(store.individual(p).unwrap().tenure, 0.0);
        store.check_consistency().unwrap();
    }

    #[test]
    fn double_hire_is_rejected() {
        let mut rng = SimRng::new(7);
        let (society, mut store) = small_store(&mut rng);
        let p = store.spawn(&society, 16.0, &mut rng);
        let q = store.spawn(&society, 16.0, &mut rng);
        store.hire(p, JobId(0)).unwrap();
        assert!(matches!(store.hire(q, JobId(0)), Err(AgentError::AlreadyFilled(_))));
        assert!(matches!(store.hire(p, JobId(1)), Err(AgentError::AlreadyEmployed(_))));
    }

    #[test]
    fn remove_vacates_job_and_frees_one_cell() {
        let mut rng = SimRng::new(8);
        let (society, mut store) = small_store(&mut rng);
        let p = store.spawn(&society, 16.0, &mut rng);
        store.hire(p, JobId(4)).unwrap();
        let before = store.locations.free_cells();
        store.remove(p).unwrap();
        assert_eq!(store.locations.free_cells(), before + 1);
        assert!(store.job(JobId(4)).unwrap().is_vacant());
        assert_eq!(store.population(), 0);
    }

    #[test]
    fn broken_link_fails_loudly() {
        let mut rng = SimRng::new(9);
        let (society, mut store) = small_store(&mut rng);
        let p = store.spawn(&society, 16.0, &mut rng);
        store.individual_mut(p).unwrap().job = Some(JobId(1));
        assert!(matches!(store.check_consistency(), Err(AgentError::Inconsistent { .. })));
        assert!(matches!(store.fire(p), Err(AgentError::Inconsistent { .. })));
    }

    #[test]
    fn clone_is_independent() {
        let mut rng = SimRng::new(10);
        let (society, mut store) = small_store(&mut rng);
        let p = store.spawn(&society, 16.0, &mut rng);
        let copy = store.clone();
        store.hire(p, JobId(0)).unwrap();
        assert!(copy.job(JobId(0)).unwrap().is_vacant());
        assert!(copy.individual(p).unwrap().job.is_none());
    }
}
