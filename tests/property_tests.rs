//! Property-based tests for the transducer models and simulators.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated models and inputs.

use proptest::prelude::*;
use transducer_sim::mealy::MealyRecord;
use transducer_sim::{MealyModel, MealySimulator, MooreModel, MooreSimulator, Simulate, Status};

const STATES: [&str; 4] = ["q0", "q1", "q2", "q3"];
const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_symbol()(index in 0..SYMBOLS.len()) -> char {
        SYMBOLS[index]
    }
}

prop_compose! {
    fn arbitrary_input()(symbols in prop::collection::vec(arbitrary_symbol(), 0..12)) -> String {
        symbols.into_iter().collect()
    }
}

prop_compose! {
    fn arbitrary_mealy()(
        edges in prop::collection::vec(
            (arbitrary_state(), arbitrary_symbol(), arbitrary_state(), "[01]{0,2}"),
            0..16,
        ),
        start in prop::option::of(arbitrary_state()),
    ) -> MealyModel {
        let mut model = MealyModel::new();
        for (source, symbol, target, output) in edges {
            model.add_transition(source, symbol, target, output);
        }
        if let Some(start) = start {
            model.set_start_state(start);
        }
        model
    }
}

prop_compose! {
    fn arbitrary_moore()(
        edges in prop::collection::vec(
            (arbitrary_state(), arbitrary_symbol(), arbitrary_state()),
            0..16,
        ),
        outputs in prop::collection::vec((arbitrary_state(), "[xyz]"), 0..4),
        start in prop::option::of(arbitrary_state()),
    ) -> MooreModel {
        let mut model = MooreModel::new();
        for (source, symbol, target) in edges {
            model.add_transition(source, symbol, target);
        }
        for (state, output) in outputs {
            model.set_state_output(state, output);
        }
        if let Some(start) = start {
            model.set_start_state(start);
        }
        model
    }
}

proptest! {
    #[test]
    fn mealy_record_round_trip_preserves_lookups(model in arbitrary_mealy()) {
        let mut restored = MealyModel::new();
        restored.deserialize(model.serialize()).unwrap();

        for state in STATES {
            for symbol in SYMBOLS {
                prop_assert_eq!(
                    restored.do_transition(state, symbol),
                    model.do_transition(state, symbol)
                );
            }
        }
        prop_assert_eq!(restored.start_state(), model.start_state());
    }

    #[test]
    fn moore_record_round_trip_preserves_outputs(model in arbitrary_moore()) {
        let mut restored = MooreModel::new();
        restored.deserialize(model.serialize()).unwrap();

        for state in STATES {
            prop_assert_eq!(restored.state_output(state), model.state_output(state));
            for symbol in SYMBOLS {
                prop_assert_eq!(
                    restored.do_transition(state, symbol),
                    model.do_transition(state, symbol)
                );
            }
        }
    }

    #[test]
    fn mealy_record_survives_json(model in arbitrary_mealy()) {
        let json = model.serialize().to_json().unwrap();
        let record = MealyRecord::from_json(&json).unwrap();

        prop_assert_eq!(MealyModel::try_from(record).unwrap(), model);
    }

    #[test]
    fn later_transition_overwrites_earlier(
        mut model in arbitrary_mealy(),
        source in arbitrary_state(),
        symbol in arbitrary_symbol(),
        first in arbitrary_state(),
        second in arbitrary_state(),
    ) {
        model.add_transition(source, symbol, first, "1");
        model.add_transition(source, symbol, second, "2");

        let transition = model.do_transition(source, symbol).unwrap();
        prop_assert_eq!(&transition.next_state, second);
        prop_assert_eq!(transition.output.as_str(), "2");
    }

    #[test]
    fn removal_with_wrong_target_is_ignored(
        mut model in arbitrary_mealy(),
        source in arbitrary_state(),
        symbol in arbitrary_symbol(),
        target in arbitrary_state(),
        wrong in arbitrary_state(),
    ) {
        prop_assume!(target != wrong);
        model.add_transition(source, symbol, target, "o");

        model.remove_transition(source, symbol, wrong);

        prop_assert!(model.do_transition(source, symbol).is_some());
        prop_assert!(model.has_transition(source, target));
    }

    #[test]
    fn remove_transitions_leaves_no_edge_touching_state(
        mut model in arbitrary_moore(),
        state in arbitrary_state(),
    ) {
        model.remove_transitions(state);

        for other in STATES {
            prop_assert!(!model.has_transition(state, other));
            prop_assert!(!model.has_transition(other, state));
        }
    }

    #[test]
    fn run_terminates_with_final_status(model in arbitrary_mealy(), input in arbitrary_input()) {
        let mut sim = MealySimulator::new(&model);
        sim.initialize(&input);

        for _ in 0..=input.chars().count() {
            sim.step();
        }

        prop_assert!(sim.status().is_final());
        prop_assert!(sim.index() <= input.chars().count());
    }

    #[test]
    fn rejected_run_is_frozen(model in arbitrary_mealy(), input in arbitrary_input()) {
        let mut sim = MealySimulator::new(&model);
        if sim.run(&input) != Status::Reject {
            return Ok(());
        }

        let index = sim.index();
        let output = sim.output().to_string();
        let states = sim.states().to_vec();

        sim.step();

        prop_assert_eq!(sim.status(), Status::Reject);
        prop_assert_eq!(sim.index(), index);
        prop_assert_eq!(sim.output(), output.as_str());
        prop_assert_eq!(sim.states(), states.as_slice());
    }

    #[test]
    fn accepted_mealy_run_consumes_all_input(model in arbitrary_mealy(), input in arbitrary_input()) {
        let mut sim = MealySimulator::new(&model);
        if !sim.accepts(&input) {
            return Ok(());
        }

        prop_assert_eq!(sim.index(), input.chars().count());
        prop_assert_eq!(sim.consumed(), input);
        prop_assert!(sim.remaining().is_empty());
    }

    #[test]
    fn moore_output_follows_entered_states(
        model in arbitrary_moore(),
        input in arbitrary_input(),
    ) {
        let mut sim = MooreSimulator::new(&model);
        if !sim.accepts(&input) {
            return Ok(());
        }

        let expected: String = sim
            .trace()
            .steps()
            .iter()
            .flat_map(|step| step.states.iter())
            .map(|state| model.state_output(state.as_str()))
            .collect();

        prop_assert_eq!(sim.output(), expected.as_str());
        prop_assert_eq!(sim.trace().steps().len(), input.chars().count());
    }
}
