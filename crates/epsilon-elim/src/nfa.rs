//! Epsilon-free Non-deterministic Finite Automaton.

use crate::state::{StateId, StateSet};
use crate::symbol::{Alphabet, SymbolId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A Non-deterministic Finite Automaton without epsilon transitions.
///
/// Produced by [`crate::eliminate_epsilon`]; shares the source automaton's
/// state count, alphabet and start state.
#[derive(Debug, Clone)]
pub struct Nfa {
    state_count: StateId,
    alphabet: Alphabet,
    start_state: StateId,
    accepting: StateSet,
    /// Transitions: (source, symbol) -> set of destination states
    transitions: HashMap<(StateId, SymbolId), StateSet>,
}

impl Nfa {
    pub(crate) fn new(
        state_count: StateId,
        alphabet: Alphabet,
        start_state: StateId,
        accepting: StateSet,
        transitions: HashMap<(StateId, SymbolId), StateSet>,
    ) -> Self {
        Self {
            state_count,
            alphabet,
            start_state,
            accepting,
            transitions,
        }
    }

    /// Get the number of states.
    pub fn state_count(&self) -> StateId {
        self.state_count
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the start state.
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Get the accepting states.
    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Get all transitions as an iterator of triples.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    /// Convert the transition relation to an ordered map keyed by state and
    /// symbol character, for rendering by an output collaborator. States and
    /// symbols appear in ascending declaration order.
    pub fn to_transition_map(&self) -> IndexMap<StateId, IndexMap<char, Vec<StateId>>> {
        let mut map: IndexMap<StateId, IndexMap<char, Vec<StateId>>> = IndexMap::new();

        for source in 0..self.state_count {
            for (id, symbol) in self.alphabet.iter().enumerate() {
                if let Some(dests) = self.transitions.get(&(source, id as SymbolId)) {
                    map.entry(source)
                        .or_default()
                        .entry(symbol)
                        .or_default()
                        .extend(dests.iter());
                }
            }
        }

        map
    }

    /// Simulate the automaton on an input string.
    ///
    /// Plain NFA semantics: no epsilon steps exist, so each symbol is a
    /// single move over the live state set.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = StateSet::with_capacity(self.state_count as usize);
        current.insert(self.start_state);

        for ch in input.chars() {
            let Some(symbol) = self.alphabet.index_of(ch) else {
                return false;
            };
            let mut next = StateSet::with_capacity(self.state_count as usize);
            for state in current.iter() {
                if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                    next.union_with(destinations);
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        current.intersects(&self.accepting)
    }
}
