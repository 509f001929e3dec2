//! Epsilon-elimination for nondeterministic finite automata.
//!
//! This crate converts an ε-NFA (an NFA with empty-string transitions) into
//! an equivalent NFA without them, the form required by later lexer-pipeline
//! stages such as subset construction. It provides:
//! - A validated [`EpsilonNfa`] automaton model
//! - Epsilon-closure computation ([`EpsilonClosure`])
//! - Rewriting of symbol transitions through the closure
//! - Propagation of acceptance through the closure
//! - The [`eliminate_epsilon`] pipeline tying the steps together

mod acceptance;
mod closure;
mod convert;
mod epsilon_nfa;
mod error;
mod nfa;
mod rewrite;
mod state;
mod symbol;

pub use acceptance::propagate_acceptance;
pub use closure::EpsilonClosure;
pub use convert::eliminate_epsilon;
pub use epsilon_nfa::EpsilonNfa;
pub use error::AutomatonError;
pub use nfa::Nfa;
pub use rewrite::rewrite_transitions;
pub use state::{StateId, StateSet};
pub use symbol::{Alphabet, SymbolId};
