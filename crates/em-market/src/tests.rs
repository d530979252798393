//! Unit tests for em-market.

use em_agent::{AgentStore, AgentStoreBuilder};
use em_core::{IndividualId, JobKindId, SimRng};
use em_society::{Categorical, Factor, JobKind, Society, Weight};

use crate::{Applications, EmployerLedger, InterviewScores, LaborMarket};

fn world(seed: u64, people: usize) -> (Society, AgentStore, SimRng) {
    let society = Society::standard().unwrap();
    let mut rng = SimRng::new(seed);
    let mut store = AgentStoreBuilder::new(&society)
        .employers(4)
        .jobs_per_employer(5)
        .build(&mut rng);
    for _ in 0..people {
        store.spawn(&society, 16.0, &mut rng);
    }
    (society, store, rng)
}

/// One employer with two identical slots and two applicants whose interview
/// scores are exactly `skills`.
fn two_slots(skills: [f64; 2]) -> (Society, AgentStore, SimRng) {
    let kind = JobKind {
        name:             "clerk".into(),
        weights:          Vec::new(),
        commonality:      1.0,
        starting_pay:     20_000.0,
        annual_raise:     0.0,
        productivity_max: 30_000.0,
        productivity_tau: 1.0,
        hiring_cost:      0.0,
        retention:        vec![1.0],
    };
    let gender = Categorical::new("gender", [("any", 1.0)]).unwrap();
    let race = Categorical::new("race", [("any", 1.0)]).unwrap();
    let mut society = Society::new(gender, race, Vec::new(), vec![kind]).unwrap();
    society.distance_penalty_scale = 0.0;

    let mut rng = SimRng::new(11);
    let mut store = AgentStoreBuilder::new(&society)
        .employers(1)
        .jobs_per_employer(2)
        .build(&mut rng);
    for _ in 0..2 {
        store.spawn(&society, 16.0, &mut rng);
    }
    for (person, skill) in store.individuals_mut().zip(skills) {
        person.attributes.apply_propensity = 1.0;
        person.attributes.interview_spread = 0.0;
        person.attributes.interview_skill = skill;
    }
    (society, store, rng)
}

/// Make everyone apply everywhere.
fn eager(store: &mut AgentStore, society: &mut Society) {
    society.distance_penalty_scale = 0.0;
    for p in store.individuals_mut() {
        p.attributes.apply_propensity = 1.0;
    }
}

#[cfg(test)]
mod applications {
    use super::*;

    #[test]
    fn eager_population_applies_to_every_vacancy() {
        let (mut society, mut store, mut rng) = world(1, 6);
        eager(&mut store, &mut society);
        let apps = Applications::collect(&store, &society, &mut rng).unwrap();
        assert_eq!(apps.by_job.len(), 20);
        assert_eq!(apps.count(), 20 * 6);
    }

    #[test]
    fn default_penalty_blocks_distant_applications() {
        let (society, store, mut rng) = world(2, 30);
        let apps = Applications::collect(&store, &society, &mut rng).unwrap();
        for (job, applicants) in &apps.by_job {
            let home = store.employer_of(*job).unwrap().placement.neighbourhood;
            for id in applicants {
                assert_eq!(store.individual(*id).unwrap().placement.neighbourhood, home);
            }
        }
    }

    #[test]
    fn employed_individuals_do_not_apply() {
        let (mut society, mut store, mut rng) = world(3, 2);
        eager(&mut store, &mut society);
        let first = store.individuals().next().unwrap().id;
        let job = store.open_jobs()[0];
        store.hire(first, job).unwrap();
        let apps = Applications::collect(&store, &society, &mut rng).unwrap();
        assert_eq!(apps.by_job.len(), 19);
        assert!(apps.by_job.iter().all(|(_, a)| !a.contains(&first)));
    }

    #[test]
    fn missing_pair_scores_negative_infinity() {
        let (society, store, mut rng) = world(4, 0);
        let apps = Applications::collect(&store, &society, &mut rng).unwrap();
        let scores = InterviewScores::conduct(&apps, &store, &society, &mut rng).unwrap();
        assert!(scores.is_empty());
        assert_eq!(scores.get(store.open_jobs()[0], IndividualId(0)), f64::NEG_INFINITY);
    }
}

#[cfg(test)]
mod matching {
    use super::*;

    #[test]
    fn links_stay_one_to_one() {
        for seed in 0..20 {
            let (mut society, mut store, mut rng) = world(seed, 40);
            eager(&mut store, &mut society);
            let report = LaborMarket::new(10).run(&mut store, &society, &mut rng).unwrap();
            store.check_consistency().unwrap();

            let mut people: Vec<_> = report.hires.iter().map(|(p, _)| *p).collect();
            let mut jobs: Vec<_> = report.hires.iter().map(|(_, j)| *j).collect();
            people.sort();
            people.dedup();
            jobs.sort();
            jobs.dedup();
            assert_eq!(people.len(), report.hires.len());
            assert_eq!(jobs.len(), report.hires.len());
        }
    }

    #[test]
    fn forbidden_trait_is_never_hired() {
        for seed in 0..20 {
            let (mut society, mut store, mut rng) = world(seed, 40);
            eager(&mut store, &mut society);
            // Large positive weights elsewhere must not rescue a forbidden
            // applicant.
            for k in 0..society.job_kinds().len() {
                for gender in ["male", "female"] {
                    society.set_job_weight(JobKindId(k as u8), Factor::Trait(gender.into()), Weight::Score(100.0));
                }
            }
            LaborMarket::new(10).run(&mut store, &society, &mut rng).unwrap();
            for job in store.jobs() {
                let Some(holder) = job.employee else { continue };
                let person = store.individual(holder).unwrap();
                for w in &society.job_kind(job.kind).weights {
                    if let (Factor::Trait(t), Weight::Forbidden) = (&w.factor, w.weight) {
                        assert!(!person.has(t), "{holder} holds forbidden `{t}`");
                    }
                }
            }
        }
    }

    #[test]
    fn zero_rounds_hire_nobody() {
        let (mut society, mut store, mut rng) = world(5, 20);
        eager(&mut store, &mut society);
        let report = LaborMarket::new(0).run(&mut store, &society, &mut rng).unwrap();
        assert!(report.hires.is_empty());
        assert!(report.applications > 0);
    }

    #[test]
    fn same_seed_same_hires() {
        let run = || {
            let (mut society, mut store, mut rng) = world(6, 30);
            eager(&mut store, &mut society);
            LaborMarket::new(10).run(&mut store, &society, &mut rng).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn single_round_hires_only_the_top_applicant() {
        let (society, mut store, mut rng) = two_slots([5.0, 1.0]);
        let ids: Vec<_> = store.individuals().map(|p| p.id).collect();
        let jobs = store.open_jobs();
        let report = LaborMarket::new(1).run(&mut store, &society, &mut rng).unwrap();
        // Both slots offer to the stronger applicant, who takes the first.
        assert_eq!(report.offers, 2);
        assert_eq!(report.hires, vec![(ids[0], jobs[0])]);
        assert!(store.job(jobs[1]).unwrap().is_vacant());
    }

    #[test]
    fn later_round_reoffers_to_next_best() {
        let (society, mut store, mut rng) = two_slots([5.0, 1.0]);
        let ids: Vec<_> = store.individuals().map(|p| p.id).collect();
        let jobs = store.open_jobs();
        let report = LaborMarket::new(2).run(&mut store, &society, &mut rng).unwrap();
        assert_eq!(report.offers, 3);
        assert_eq!(report.hires, vec![(ids[0], jobs[0]), (ids[1], jobs[1])]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn non_positive_best_score_makes_no_offer() {
        let (society, mut store, mut rng) = two_slots([0.0, -1.0]);
        let report = LaborMarket::new(5).run(&mut store, &society, &mut rng).unwrap();
        assert_eq!(report.applications, 4);
        assert_eq!(report.offers, 0);
        assert!(report.hires.is_empty());
        assert_eq!(store.open_jobs().len(), 2);
    }

    #[test]
    fn score_ties_go_to_earlier_applicant() {
        let (society, mut store, mut rng) = two_slots([2.0, 2.0]);
        let ids: Vec<_> = store.individuals().map(|p| p.id).collect();
        let jobs = store.open_jobs();
        let report = LaborMarket::new(2).run(&mut store, &society, &mut rng).unwrap();
        assert_eq!(report.hires, vec![(ids[0], jobs[0]), (ids[1], jobs[1])]);
    }

    #[test]
    fn local_offers_are_more_desirable() {
        let (society, store, _) = world(7, 1);
        let person = store.individuals().next().unwrap().id;
        let home = store.individual(person).unwrap().placement.neighbourhood;
        for job in store.jobs().to_vec() {
            let d = crate::matching::desirability(person, job.id, &store, &society).unwrap();
            let pay = society.job_kind(job.kind).starting_pay;
            let local = store.employer_of(job.id).unwrap().placement.neighbourhood == home;
            assert_eq!(d, if local { pay + 5_000.0 } else { pay });
        }
    }
}

#[cfg(test)]
mod ledger {
    use super::*;

    #[test]
    fn new_hire_books_hiring_cost_once() {
        let (society, mut store, _) = world(8, 1);
        let person = store.individuals().next().unwrap().id;
        let job = store.open_jobs()[0];
        store.hire(person, job).unwrap();
        let kind = society.job_kind(store.job(job).unwrap().kind).clone();

        let step = EmployerLedger::settle(&mut store, &society, 0.1).unwrap();
        assert_eq!(step.hiring_cost, kind.hiring_cost);
        assert!((step.salary - kind.starting_pay * 0.1).abs() < 1e-9);
        assert_eq!(step.productivity, 0.0);
        assert!((step.net - (-kind.hiring_cost - kind.starting_pay * 0.1)).abs() < 1e-9);

        store.individual_mut(person).unwrap().tenure = 1.0;
        let step = EmployerLedger::settle(&mut store, &society, 0.1).unwrap();
        assert_eq!(step.hiring_cost, 0.0);
        let expected_prod = kind.productivity_max * (1.0 - (-1.0 / kind.productivity_tau).exp()) * 0.1;
        assert!((step.productivity - expected_prod).abs() < 1e-9);

        let income = store.individual(person).unwrap().income;
        let expected_income = kind.starting_pay * 0.1 + (kind.starting_pay + kind.annual_raise) * 0.1;
        assert!((income - expected_income).abs() < 1e-9);
    }

    #[test]
    fn totals_accumulate() {
        let (society, mut store, _) = world(9, 1);
        let person = store.individuals().next().unwrap().id;
        let job = store.open_jobs()[3];
        store.hire(person, job).unwrap();
        let employer = store.job(job).unwrap().employer;
        let a = EmployerLedger::settle(&mut store, &society, 0.1).unwrap();
        let b = EmployerLedger::settle(&mut store, &society, 0.1).unwrap();
        let total = store.employers[employer.index()].total;
        assert!((total.net - (a.net + b.net)).abs() < 1e-9);
        assert_eq!(store.employers[employer.index()].last_step, b);
    }

    #[test]
    fn empty_roster_settles_to_zero() {
        let (society, mut store, _) = world(10, 0);
        let step = EmployerLedger::settle(&mut store, &society, 0.1).unwrap();
        assert_eq!(step.net, 0.0);
    }
}
