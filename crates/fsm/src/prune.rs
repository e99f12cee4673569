//! Dead-state elimination: useless states before determinization,
//! unreachable states after it.

use crate::automaton::Automaton;
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Remove every useless state: a state that is not accepting and whose
/// outgoing transitions (if any) all loop back to itself.
///
/// Runs to fixpoint: each round collects its victims from an immutable scan,
/// then removes them and strips every transition targeting them, which can
/// leave a predecessor with no outgoing transitions and make it the next
/// round's victim. Returns the number of states removed.
pub fn remove_useless(automaton: &mut Automaton) -> usize {
    let mut removed = 0;
    loop {
        let victims: Vec<String> = automaton
            .states()
            .filter(|state| !state.is_accepting && state.only_self_loops())
            .map(|state| state.name().to_owned())
            .collect();
        if victims.is_empty() {
            break;
        }

        for name in &victims {
            trace!("state '{name}' is useless");
            automaton.remove(name);
        }
        for state in automaton.states_mut() {
            for name in &victims {
                state.remove_transitions_to(name);
            }
        }
        removed += victims.len();
    }
    debug!("useless-state pass removed {removed} states");
    removed
}

/// Remove every state not reachable from a start state by following
/// transitions transitively. Returns the number of states removed.
pub fn remove_unreachable(automaton: &mut Automaton) -> usize {
    let mut reachable: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = automaton
        .start_states()
        .map(|state| state.name().to_owned())
        .collect();

    while let Some(name) = queue.pop_front() {
        if !reachable.insert(name.clone()) {
            continue;
        }
        if let Some(state) = automaton.state(&name) {
            for (_, target) in state.transitions() {
                if !reachable.contains(target) {
                    queue.push_back(target.to_owned());
                }
            }
        }
    }

    // A reachable state's targets are reachable themselves, so survivors
    // never hold a transition into the removed set.
    let victims: Vec<String> = automaton
        .state_names()
        .filter(|name| !reachable.contains(*name))
        .map(str::to_owned)
        .collect();
    for name in &victims {
        trace!("state '{name}' is unreachable");
        automaton.remove(name);
    }
    debug!("unreachable-state pass removed {} states", victims.len());
    victims.len()
}
