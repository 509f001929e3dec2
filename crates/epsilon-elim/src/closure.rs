//! Epsilon-closure computation: the reflexive-transitive closure of the
//! epsilon relation.

use crate::epsilon_nfa::EpsilonNfa;
use crate::state::{StateId, StateSet};

/// The epsilon-closure relation of an automaton.
///
/// Row `i` holds exactly the states reachable from `i` using zero or more
/// epsilon moves. The relation is reflexive (every row contains its own
/// state) and transitively closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonClosure {
    rows: Vec<StateSet>,
}

impl EpsilonClosure {
    /// Compute the closure of an automaton's epsilon relation by
    /// depth-first search from each state.
    pub fn compute(nfa: &EpsilonNfa) -> Self {
        let rows = (0..nfa.state_count())
            .map(|state| close_from(nfa, state))
            .collect();
        Self { rows }
    }

    /// The identity relation over the given number of states: each state
    /// closes only over itself. This is the closure of an empty epsilon
    /// relation.
    pub fn identity(state_count: StateId) -> Self {
        let rows = (0..state_count)
            .map(|state| {
                let mut row = StateSet::with_capacity(state_count as usize);
                row.insert(state);
                row
            })
            .collect();
        Self { rows }
    }

    /// Check whether `to` is epsilon-reachable from `from`.
    pub fn contains(&self, from: StateId, to: StateId) -> bool {
        self.rows[from as usize].contains(to)
    }

    /// Get the closure row of a state.
    pub fn row(&self, state: StateId) -> &StateSet {
        &self.rows[state as usize]
    }

    /// Get the number of states the relation covers.
    pub fn state_count(&self) -> StateId {
        self.rows.len() as StateId
    }
}

/// Depth-first search over the epsilon graph from a single state.
fn close_from(nfa: &EpsilonNfa, state: StateId) -> StateSet {
    let mut closure = StateSet::with_capacity(nfa.state_count() as usize);
    let mut stack = vec![state];

    while let Some(s) = stack.pop() {
        if closure.contains(s) {
            continue;
        }
        closure.insert(s);

        if let Some(destinations) = nfa.epsilon_destinations(s) {
            for dest in destinations.iter() {
                if !closure.contains(dest) {
                    stack.push(dest);
                }
            }
        }
    }

    closure
}
