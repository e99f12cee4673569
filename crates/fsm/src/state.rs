//! State nodes of the transition graph.

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// Separator used when deriving a composite state's display name.
pub const NAME_SEPARATOR: &str = "-";

/// A named node of the automaton graph.
///
/// Transitions are stored as symbol → ordered set of target state *names*,
/// never as references into the registry, so pruning a state can never leave
/// a dangling pointer behind. A state created by the determinization engine
/// stands for a set of original NFA states; that sorted, deduplicated set is
/// its identity and its display name is derived from it.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    members: BTreeSet<String>,
    /// True if any ingested record marked this state as a start state.
    pub is_start: bool,
    /// True if this state (or, for a composite, any merged state) accepts.
    pub is_accepting: bool,
    deterministic: bool,
    transitions: IndexMap<char, IndexSet<String>>,
}

impl State {
    /// Create a state for an original NFA name, with no transitions.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let members = BTreeSet::from([name.clone()]);
        Self {
            name,
            members,
            is_start: false,
            is_accepting: false,
            deterministic: true,
            transitions: IndexMap::new(),
        }
    }

    /// Create a composite state standing for a set of merged NFA states.
    /// The display name joins the member names in sorted order.
    pub fn composite(members: BTreeSet<String>) -> Self {
        Self {
            name: display_name(&members),
            members,
            is_start: false,
            is_accepting: false,
            deterministic: true,
            transitions: IndexMap::new(),
        }
    }

    /// Get the state's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the set of original NFA state names this state stands for.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// True iff the state has at most one outgoing transition per symbol.
    /// Kept current by every transition-set mutation.
    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// Add a transition to `target` on `symbol`. Duplicate `(symbol, target)`
    /// pairs collapse to one transition; returns `false` for a duplicate.
    pub fn add_transition(&mut self, symbol: char, target: impl Into<String>) -> bool {
        let inserted = self.transitions.entry(symbol).or_default().insert(target.into());
        if inserted {
            self.recompute_deterministic();
        }
        inserted
    }

    /// Replace every transition on `symbol` with a single one to `target`.
    pub fn replace_transitions(&mut self, symbol: char, target: impl Into<String>) {
        let targets = self.transitions.entry(symbol).or_default();
        targets.clear();
        targets.insert(target.into());
        self.recompute_deterministic();
    }

    /// Drop every transition targeting `name`, on any symbol. Returns `true`
    /// if anything was removed.
    pub fn remove_transitions_to(&mut self, name: &str) -> bool {
        let mut removed = false;
        for targets in self.transitions.values_mut() {
            removed |= targets.shift_remove(name);
        }
        if removed {
            self.transitions.retain(|_, targets| !targets.is_empty());
            self.recompute_deterministic();
        }
        removed
    }

    /// Iterate over the targets of `symbol`, in transition insertion order.
    pub fn targets(&self, symbol: char) -> impl Iterator<Item = &str> + '_ {
        self.transitions
            .get(&symbol)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Count the outgoing transitions labeled `symbol`.
    pub fn transition_count(&self, symbol: char) -> usize {
        self.transitions.get(&symbol).map_or(0, IndexSet::len)
    }

    /// Iterate over all `(symbol, target)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(symbol, targets)| targets.iter().map(move |t| (*symbol, t.as_str())))
    }

    /// True iff every outgoing transition loops back to this state, or there
    /// are none at all.
    pub fn only_self_loops(&self) -> bool {
        let name = self.name.as_str();
        self.transitions().all(|(_, target)| target == name)
    }

    fn recompute_deterministic(&mut self) {
        self.deterministic = self.transitions.values().all(|targets| targets.len() <= 1);
    }
}

/// Derive the display name of a member set: sorted names joined by `-`.
pub fn display_name(members: &BTreeSet<String>) -> String {
    members
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}
