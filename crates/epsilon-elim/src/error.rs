//! Error types for automaton construction.

use thiserror::Error;

/// Errors raised while declaring or populating an automaton.
///
/// Conversion itself is total over a validated automaton and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A state id or symbol referenced outside the declared bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// An empty or duplicated alphabet declaration.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}
