//! The automaton graph: a name-keyed state registry plus its alphabet.

use crate::alphabet::Alphabet;
use crate::state::State;
use indexmap::IndexMap;

/// The full transition graph of one automaton.
///
/// States are owned by a name-keyed, insertion-ordered registry; transitions
/// refer to targets by name. One instance is mutated in place through
/// ingestion, pruning and determinization, so the same structure represents
/// the NFA before conversion and the DFA after.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    states: IndexMap<String, State>,
    alphabet: Alphabet,
}

impl Automaton {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the alphabet shared by all states.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check whether a state with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Look up a state by name, mutably.
    pub fn state_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.get_mut(name)
    }

    /// Look up a state by name, creating an empty non-start one if absent.
    pub fn find_or_create(&mut self, name: &str) -> &mut State {
        self.states
            .entry(name.to_owned())
            .or_insert_with(|| State::new(name))
    }

    /// Insert an already-built state, keyed by its name.
    pub fn insert(&mut self, state: State) {
        self.states.insert(state.name().to_owned(), state);
    }

    /// Remove a state from the registry. Transitions elsewhere that target
    /// it are the caller's responsibility; the pruning passes strip them.
    pub fn remove(&mut self, name: &str) -> Option<State> {
        self.states.shift_remove(name)
    }

    /// Iterate over all states in registry order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub(crate) fn states_mut(&mut self) -> impl Iterator<Item = &mut State> {
        self.states.values_mut()
    }

    /// Iterate over all state names in registry order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Iterate over the start states.
    pub fn start_states(&self) -> impl Iterator<Item = &State> {
        self.states.values().filter(|state| state.is_start)
    }

    /// Add a transition between two registered states, registering the
    /// symbol in the alphabet. Both endpoints must already exist.
    pub fn add_transition(&mut self, from: &str, symbol: char, to: &str) {
        assert!(
            self.states.contains_key(to),
            "transition target '{to}' is not registered"
        );
        self.alphabet.register(symbol);
        let state = self
            .states
            .get_mut(from)
            .expect("transition source must be registered");
        state.add_transition(symbol, to);
    }

    /// Render the state × symbol transition matrix for diagnostics.
    /// Start states are marked `->`, accepting states `*`.
    pub fn table(&self) -> String {
        let mut out = String::new();
        for symbol in self.alphabet.symbols() {
            out.push_str(&format!("\t'{symbol}'"));
        }
        out.push('\n');
        for state in self.states.values() {
            if state.is_start {
                out.push_str("->");
            }
            if state.is_accepting {
                out.push('*');
            }
            out.push_str(state.name());
            for symbol in self.alphabet.symbols() {
                out.push('\t');
                let targets: Vec<&str> = state.targets(symbol).collect();
                out.push_str(&targets.join(","));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_or_create() {
        let mut automaton = Automaton::new();
        automaton.find_or_create("A").is_start = true;

        // A second lookup must return the same state, flags intact.
        let again = automaton.find_or_create("A");
        assert!(again.is_start);
        assert_eq!(automaton.len(), 1);
    }

    #[test]
    fn test_add_transition_registers_symbol() {
        let mut automaton = Automaton::new();
        automaton.find_or_create("A");
        automaton.find_or_create("B");
        automaton.add_transition("A", 'x', "B");

        assert!(automaton.alphabet().contains('x'));
        let targets: Vec<&str> = automaton.state("A").unwrap().targets('x').collect();
        assert_eq!(targets, vec!["B"]);
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_add_transition_rejects_unknown_target() {
        let mut automaton = Automaton::new();
        automaton.find_or_create("A");
        automaton.add_transition("A", 'x', "missing");
    }

    #[test]
    fn test_table_lists_states_and_targets() {
        let mut automaton = Automaton::new();
        automaton.find_or_create("A").is_start = true;
        automaton.find_or_create("fB").is_accepting = true;
        automaton.add_transition("A", 'a', "fB");

        let table = automaton.table();
        assert!(table.contains("'a'"));
        assert!(table.contains("->A"));
        assert!(table.contains("*fB"));
        assert!(table.lines().nth(1).unwrap().contains("fB"));
    }
}
