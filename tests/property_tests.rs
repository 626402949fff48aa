//! Property-based tests for machine dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated stage lists.

use proptest::prelude::*;
use scoro::core::{MachineOutcome, Stage, StageOutcome};
use scoro::{Machine, MachineBuilder, Nested};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<(usize, u32)>>>;

/// Completes on its `needed`-th poll of each activation and logs every poll.
struct Gated {
    id: usize,
    needed: u32,
    polls: u32,
    log: Log,
}

impl Stage for Gated {
    fn step(&mut self) -> StageOutcome {
        self.polls += 1;
        self.log.borrow_mut().push((self.id, self.polls));
        StageOutcome::from_ready(self.polls >= self.needed)
    }

    fn reset(&mut self) {
        self.polls = 0;
    }
}

fn build(needed: &[u32], log: &Log) -> Machine<scoro::builder::DynStages> {
    needed
        .iter()
        .enumerate()
        .fold(MachineBuilder::new(), |builder, (id, &needed)| {
            builder.stage(Gated {
                id,
                needed,
                polls: 0,
                log: Rc::clone(log),
            })
        })
        .build()
        .unwrap()
}

fn drive<L: scoro::StageList>(machine: &mut Machine<L>, limit: usize) -> Vec<MachineOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..limit {
        let outcome = machine.step();
        outcomes.push(outcome);
        if outcome.is_finished() {
            break;
        }
    }
    outcomes
}

prop_compose! {
    fn arbitrary_thresholds()(needed in prop::collection::vec(1..5u32, 1..12)) -> Vec<u32> {
        needed
    }
}

proptest! {
    #[test]
    fn always_complete_stages_finish_in_one_call(len in 1..64usize) {
        let log = Log::default();
        let mut machine = build(&vec![1; len], &log);

        prop_assert_eq!(machine.step(), MachineOutcome::Finished);
        prop_assert_eq!(log.borrow().len(), len);
        prop_assert_eq!(machine.cursor(), len);
    }

    #[test]
    fn number_of_calls_matches_pending_polls(needed in arbitrary_thresholds()) {
        let log = Log::default();
        let mut machine = build(&needed, &log);

        let outcomes = drive(&mut machine, 1000);
        let expected_calls: u32 = 1 + needed.iter().map(|n| n - 1).sum::<u32>();

        prop_assert_eq!(outcomes.len() as u32, expected_calls);
        prop_assert_eq!(outcomes.last().copied(), Some(MachineOutcome::Finished));
    }

    #[test]
    fn terminal_position_is_idempotent(needed in arbitrary_thresholds(), extra in 1..10usize) {
        let log = Log::default();
        let mut machine = build(&needed, &log);
        drive(&mut machine, 1000);

        let polls_logged = log.borrow().len();
        let snapshot = machine.snapshot();
        for _ in 0..extra {
            prop_assert_eq!(machine.step(), MachineOutcome::Finished);
        }

        prop_assert_eq!(log.borrow().len(), polls_logged);
        prop_assert_eq!(machine.snapshot(), snapshot);
    }

    #[test]
    fn reset_replays_identical_side_effects(needed in arbitrary_thresholds(), cut in 0..20usize) {
        let log = Log::default();
        let mut machine = build(&needed, &log);

        // Abandon a partial run first; reset must erase it completely.
        drive(&mut machine, cut);
        machine.reset();
        log.borrow_mut().clear();

        let first_outcomes = drive(&mut machine, 1000);
        let first_log = log.borrow().clone();

        machine.reset();
        log.borrow_mut().clear();
        let second_outcomes = drive(&mut machine, 1000);

        prop_assert_eq!(first_outcomes, second_outcomes);
        prop_assert_eq!(first_log, log.borrow().clone());
    }

    #[test]
    fn single_pending_stage_never_flaps(needed in 1..30u32) {
        let log = Log::default();
        let mut machine = build(&[needed], &log);

        let outcomes: Vec<_> = (0..needed + 5).map(|_| machine.step()).collect();
        let first_finished = outcomes.iter().position(|o| o.is_finished());

        prop_assert_eq!(first_finished, Some(needed as usize - 1));
        prop_assert!(outcomes[..needed as usize - 1].iter().all(|o| o.is_running()));
        prop_assert!(outcomes[needed as usize - 1..].iter().all(|o| o.is_finished()));
    }

    #[test]
    fn nested_stage_completes_on_inner_finishing_call(needed in arbitrary_thresholds()) {
        let log = Log::default();
        let mut reference = build(&needed, &log);
        let inner_calls = drive(&mut reference, 1000).len();

        let mut nested = Nested::new(build(&needed, &log));
        let outcomes: Vec<_> = (0..inner_calls).map(|_| nested.step()).collect();

        prop_assert!(outcomes[..inner_calls - 1].iter().all(|o| o.is_pending()));
        prop_assert_eq!(outcomes[inner_calls - 1], StageOutcome::Complete);
    }
}

#[test]
fn counter_scenario_across_nesting_boundary() {
    let counter = Rc::new(RefCell::new(0u32));
    let seen = Rc::clone(&counter);
    let inner = Machine::new((
        scoro::stages::Action::new(|| {}),
        scoro::stages::WaitUntil::new(move || *seen.borrow() >= 3),
    ));
    let mut outer = Machine::new((Nested::named("inner", inner),));

    let mut outcomes = Vec::new();
    for _ in 0..3 {
        *counter.borrow_mut() += 1;
        outcomes.push(outer.step());
    }

    assert_eq!(
        outcomes,
        vec![
            MachineOutcome::Running,
            MachineOutcome::Running,
            MachineOutcome::Finished,
        ]
    );
}
