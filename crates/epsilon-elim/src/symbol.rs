//! Symbol types for automata transitions.

use crate::error::AutomatonError;

/// A symbol identifier represented as a u32: the symbol's index in the
/// declared alphabet.
pub type SymbolId = u32;

/// An ordered, duplicate-free set of input symbols, fixed at construction.
///
/// Epsilon is not a symbol; the automaton model keeps epsilon moves in a
/// separate relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the given symbols.
    ///
    /// Fails with [`AutomatonError::InvalidAlphabet`] if the declaration is
    /// empty or contains a duplicate.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AutomatonError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(AutomatonError::InvalidAlphabet(
                "alphabet declaration is empty".to_string(),
            ));
        }
        for (idx, &symbol) in symbols.iter().enumerate() {
            if symbols[..idx].contains(&symbol) {
                return Err(AutomatonError::InvalidAlphabet(format!(
                    "symbol {symbol:?} declared twice"
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Get the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// An alphabet is never empty; this exists for completeness.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the id of a symbol, or `None` if it was not declared.
    pub fn index_of(&self, symbol: char) -> Option<SymbolId> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|idx| idx as SymbolId)
    }

    /// Get the symbol with the given id.
    pub fn symbol(&self, id: SymbolId) -> Option<char> {
        self.symbols.get(id as usize).copied()
    }

    /// Iterate over the symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}
