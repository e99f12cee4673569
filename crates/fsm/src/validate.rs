//! Acceptance testing of input strings against a built automaton.

use crate::automaton::Automaton;
use crate::state::State;
use log::trace;

/// Check whether the automaton accepts `input`.
///
/// Simulates from every start state (a determinized, pruned automaton has
/// exactly one left); each input symbol follows the unique transition for
/// that symbol, and a missing transition rejects immediately. After the
/// input is exhausted the run accepts iff it stopped on an accepting state.
/// Never mutates the automaton and may be called any number of times.
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    automaton
        .start_states()
        .any(|start| run(automaton, start, input))
}

fn run(automaton: &Automaton, start: &State, input: &str) -> bool {
    let mut current = start;
    for symbol in input.chars() {
        let Some(next) = current.targets(symbol).next() else {
            trace!("no transition from '{}' on '{symbol}'", current.name());
            return false;
        };
        trace!("({}, '{symbol}') -> {next}", current.name());
        current = automaton
            .state(next)
            .expect("transition target must be registered");
    }
    current.is_accepting
}
