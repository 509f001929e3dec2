//! Rewriting of symbol transitions through the epsilon-closure.

use crate::closure::EpsilonClosure;
use crate::epsilon_nfa::EpsilonNfa;
use crate::state::{StateId, StateSet};
use crate::symbol::SymbolId;
use std::collections::HashMap;

/// Build the epsilon-free transition relation of an automaton.
///
/// A rewritten edge `(s, sym, d)` exists when `s` drifts by epsilon moves
/// to some `c`, `c` steps to some `mid` on `sym`, and `mid` drifts by
/// epsilon moves to `d`. The result is a relational join
/// closure ∘ delta ∘ closure, stored separately from the input relation.
///
/// Re-applying the rule to its own output under the identity closure
/// reproduces the output unchanged.
pub fn rewrite_transitions(
    nfa: &EpsilonNfa,
    closure: &EpsilonClosure,
) -> HashMap<(StateId, SymbolId), StateSet> {
    let state_count = nfa.state_count();
    let mut result: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();

    for (&(via, symbol), mids) in nfa.delta() {
        // Everything reachable after consuming `symbol` at `via`.
        let mut targets = StateSet::with_capacity(state_count as usize);
        for mid in mids.iter() {
            targets.union_with(closure.row(mid));
        }

        // Every state that drifts to `via` inherits those targets.
        for source in 0..state_count {
            if !closure.contains(source, via) {
                continue;
            }
            result
                .entry((source, symbol))
                .or_insert_with(|| StateSet::with_capacity(state_count as usize))
                .union_with(&targets);
        }
    }

    result
}
