//! Subset construction: in-place merging of nondeterministic transitions
//! until every state has at most one transition per symbol.

use crate::automaton::Automaton;
use crate::state::{display_name, State};
use log::{debug, trace};
use std::collections::BTreeSet;

/// One pending merge: `source` has several transitions on `symbol`, to be
/// replaced by a single transition into a composite of `targets`.
struct Merge {
    source: String,
    symbol: char,
    targets: Vec<String>,
}

/// Make every state of the automaton deterministic, merging sets of
/// simultaneously-reachable states into composite states in place.
///
/// Each iteration scans the registry for the first state with a
/// nondeterministic symbol (symbols resolved in alphabet order, so the
/// output is reproducible), applies that one merge, and rescans; mutation
/// never happens under an active scan. A scan that finds nothing signals
/// the fixpoint. Returns the number of merges applied, zero when the
/// automaton was already deterministic.
pub fn determinize(automaton: &mut Automaton) -> usize {
    let mut merges = 0;
    while let Some(merge) = next_merge(automaton) {
        trace!(
            "merging {} targets of '{}' on '{}'",
            merge.targets.len(),
            merge.source,
            merge.symbol
        );
        apply_merge(automaton, &merge);
        merges += 1;
    }
    debug!("determinization applied {merges} merges");
    merges
}

/// Find the first state, in registry order, with more than one transition on
/// some symbol, taking the first such symbol in alphabet order.
fn next_merge(automaton: &Automaton) -> Option<Merge> {
    for state in automaton.states() {
        if state.is_deterministic() {
            continue;
        }
        for symbol in automaton.alphabet().symbols() {
            if state.transition_count(symbol) > 1 {
                return Some(Merge {
                    source: state.name().to_owned(),
                    symbol,
                    targets: state.targets(symbol).map(str::to_owned).collect(),
                });
            }
        }
    }
    None
}

/// Apply one merge: find or create the composite state for the merged
/// targets and redirect all of the source's transitions on the merge symbol
/// into it.
fn apply_merge(automaton: &mut Automaton, merge: &Merge) {
    // The composite's identity is the union of the merged states' member
    // sets; its transitions are the (symbol, target)-deduplicated union of
    // theirs, in transition insertion order. Same symbol with different
    // targets stays nondeterministic for a later round to resolve.
    let mut members: BTreeSet<String> = BTreeSet::new();
    let mut is_start = false;
    let mut is_accepting = false;
    let mut union: Vec<(char, String)> = Vec::new();
    for target_name in &merge.targets {
        let target = automaton
            .state(target_name)
            .expect("transition target must be registered");
        members.extend(target.members().iter().cloned());
        is_start |= target.is_start;
        is_accepting |= target.is_accepting;
        for (symbol, next) in target.transitions() {
            let pair = (symbol, next.to_owned());
            if !union.contains(&pair) {
                union.push(pair);
            }
        }
    }

    let name = display_name(&members);
    if automaton.contains(&name) {
        trace!("reusing composite state '{name}'");
        let composite = automaton
            .state_mut(&name)
            .expect("composite state just looked up");
        composite.is_start |= is_start;
        composite.is_accepting |= is_accepting;
    } else {
        trace!("creating composite state '{name}'");
        let mut composite = State::composite(members);
        composite.is_start = is_start;
        composite.is_accepting = is_accepting;
        automaton.insert(composite);
        for (symbol, target) in union {
            automaton.add_transition(&name, symbol, &target);
        }
    }

    let source = automaton
        .state_mut(&merge.source)
        .expect("merge source must be registered");
    source.replace_transitions(merge.symbol, name);
}
