//! Epsilon Non-deterministic Finite Automaton (ε-NFA) model.

use crate::closure::EpsilonClosure;
use crate::error::AutomatonError;
use crate::state::{StateId, StateSet};
use crate::symbol::{Alphabet, SymbolId};
use std::collections::HashMap;

/// An Epsilon Non-deterministic Finite Automaton.
///
/// A passive value object: states are `0..state_count`, fixed at
/// construction, and every populating operation validates its arguments
/// against the declared bounds before storing anything.
#[derive(Debug, Clone)]
pub struct EpsilonNfa {
    /// Number of states (states are numbered 0..state_count)
    state_count: StateId,
    /// Input symbols, fixed at construction
    alphabet: Alphabet,
    /// Start state
    start_state: StateId,
    /// Accepting (final) states
    accepting: StateSet,
    /// Symbol transitions: (source, symbol) -> set of destination states
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Epsilon transitions: source -> set of destination states
    epsilon: HashMap<StateId, StateSet>,
}

impl EpsilonNfa {
    /// Create an automaton with the given state count, alphabet and start
    /// state, no accepting states and no transitions.
    pub fn new(
        state_count: StateId,
        alphabet: Alphabet,
        start_state: StateId,
    ) -> Result<Self, AutomatonError> {
        if state_count == 0 {
            return Err(AutomatonError::OutOfRange(
                "automaton must have at least one state".to_string(),
            ));
        }
        if start_state >= state_count {
            return Err(AutomatonError::OutOfRange(format!(
                "start state {start_state} is not below the state count {state_count}"
            )));
        }
        Ok(Self {
            state_count,
            alphabet,
            start_state,
            accepting: StateSet::with_capacity(state_count as usize),
            transitions: HashMap::new(),
            epsilon: HashMap::new(),
        })
    }

    fn check_state(&self, state: StateId) -> Result<(), AutomatonError> {
        if state >= self.state_count {
            return Err(AutomatonError::OutOfRange(format!(
                "state {state} is not below the state count {}",
                self.state_count
            )));
        }
        Ok(())
    }

    fn check_symbol(&self, symbol: char) -> Result<SymbolId, AutomatonError> {
        self.alphabet.index_of(symbol).ok_or_else(|| {
            AutomatonError::OutOfRange(format!("symbol {symbol:?} is not in the declared alphabet"))
        })
    }

    /// Add a transition from source to destination on the given symbol.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: char,
        destination: StateId,
    ) -> Result<(), AutomatonError> {
        self.check_state(source)?;
        self.check_state(destination)?;
        let symbol = self.check_symbol(symbol)?;

        self.transitions
            .entry((source, symbol))
            .or_insert_with(|| StateSet::with_capacity(self.state_count as usize))
            .insert(destination);
        Ok(())
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(
        &mut self,
        source: StateId,
        destination: StateId,
    ) -> Result<(), AutomatonError> {
        self.check_state(source)?;
        self.check_state(destination)?;

        self.epsilon
            .entry(source)
            .or_insert_with(|| StateSet::with_capacity(self.state_count as usize))
            .insert(destination);
        Ok(())
    }

    /// Mark a state as accepting.
    pub fn add_accepting_state(&mut self, state: StateId) -> Result<(), AutomatonError> {
        self.check_state(state)?;
        self.accepting.insert(state);
        Ok(())
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

    pub(crate) fn delta(&self) -> &HashMap<(StateId, SymbolId), StateSet> {
        &self.transitions
    }

    /// Get the epsilon successors of a state, if it has any.
    pub(crate) fn epsilon_destinations(&self, state: StateId) -> Option<&StateSet> {
        self.epsilon.get(&state)
    }

    /// Get all symbol transitions as an iterator of triples.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    /// Get all epsilon transitions as an iterator of pairs.
    pub fn epsilon_transitions(&self) -> impl Iterator<Item = (StateId, StateId)> + '_ {
        self.epsilon
            .iter()
            .flat_map(|(&src, dests)| dests.iter().map(move |dst| (src, dst)))
    }

    /// Simulate the automaton on an input string under ε-NFA semantics.
    ///
    /// Tracks the set of live states: the epsilon-closure of the start
    /// state, then for each input symbol a move followed by closure. A
    /// character outside the alphabet has no transitions and rejects.
    pub fn accepts(&self, input: &str) -> bool {
        let closure = EpsilonClosure::compute(self);
        let mut current = closure.row(self.start_state).clone();

        for ch in input.chars() {
            let Some(symbol) = self.alphabet.index_of(ch) else {
                return false;
            };
            let mut next = StateSet::with_capacity(self.state_count as usize);
            for state in current.iter() {
                if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                    for dest in destinations.iter() {
                        next.union_with(closure.row(dest));
                    }
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
