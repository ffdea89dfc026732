//! Macros for writing literal machines.

/// Build a [`MealyModel`](crate::mealy::MealyModel) from a literal table.
///
/// Each transition reads `source, symbol => target / output`.
///
/// # Example
///
/// ```
/// use transducer_sim::mealy;
///
/// let model = mealy! {
///     start: "q0";
///     transitions {
///         "q0", 'a' => "q1" / "0";
///         "q1", 'b' => "q0" / "1";
///     }
/// };
///
/// assert_eq!(model.do_transition("q0", 'a').unwrap().output, "0");
/// ```
#[macro_export]
macro_rules! mealy {
    (
        start: $start:expr;
        transitions {
            $( $from:literal, $symbol:literal => $to:literal / $output:literal );* $(;)?
        }
    ) => {{
        let mut model = $crate::mealy::MealyModel::new();
        $( model.add_transition($from, $symbol, $to, $output); )*
        model.set_start_state($start);
        model
    }};
}

/// Build a [`MooreModel`](crate::moore::MooreModel) from literal tables.
///
/// Outputs read `state => output`; transitions read `source, symbol => target`.
///
/// # Example
///
/// ```
/// use transducer_sim::moore;
///
/// let model = moore! {
///     start: "q0";
///     outputs { "q0" => "x", "q1" => "y" }
///     transitions {
///         "q0", 'a' => "q1";
///         "q1", 'b' => "q0";
///     }
/// };
///
/// assert_eq!(model.state_output("q1"), "y");
/// assert_eq!(model.do_transition("q1", 'b').unwrap(), "q0");
/// ```
#[macro_export]
macro_rules! moore {
    (
        start: $start:expr;
        outputs { $( $state:literal => $value:literal ),* $(,)? }
        transitions {
            $( $from:literal, $symbol:literal => $to:literal );* $(;)?
        }
    ) => {{
        let mut model = $crate::moore::MooreModel::new();
        $( model.set_state_output($state, $value); )*
        $( model.add_transition($from, $symbol, $to); )*
        model.set_start_state($start);
        model
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::Simulate;
    use crate::mealy::MealySimulator;
    use crate::moore::MooreSimulator;

    #[test]
    fn mealy_macro_builds_table() {
        let model = mealy! {
            start: "q0";
            transitions {
                "q0", 'a' => "q1" / "0";
                "q1", 'b' => "q0" / "1"
            }
        };

        assert_eq!(model.transition_count(), 2);
        assert_eq!(model.start_state().unwrap(), "q0");

        let mut sim = MealySimulator::new(&model);
        sim.run("abab");
        assert_eq!(sim.output(), "0101");
    }

    #[test]
    fn mealy_macro_accepts_empty_table() {
        let model = mealy! {
            start: "only";
            transitions {}
        };
        assert_eq!(model.transition_count(), 0);
        assert_eq!(model.states().len(), 1);
    }

    #[test]
    fn moore_macro_builds_tables() {
        let model = moore! {
            start: "q0";
            outputs { "q0" => "x", "q1" => "y", }
            transitions {
                "q0", 'a' => "q1";
                "q1", 'b' => "q0";
            }
        };

        let mut sim = MooreSimulator::new(&model);
        assert!(sim.accepts("ab"));
        assert_eq!(sim.output(), "yx");
    }
}
