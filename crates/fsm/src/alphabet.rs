//! The ordered set of input symbols an automaton operates over.

use indexmap::IndexSet;

/// An insertion-ordered set of distinct input symbols.
///
/// Symbols are registered as they are first seen during ingestion and the
/// alphabet only ever grows; determinization never introduces new symbols.
/// Iteration order is first-seen order, which makes every pass over the
/// alphabet reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: IndexSet<char>,
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol, keeping first-seen order. Returns `false` if the
    /// symbol was already present.
    pub fn register(&mut self, symbol: char) -> bool {
        self.symbols.insert(symbol)
    }

    /// Check whether a symbol has been registered.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Iterate over all symbols in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Get the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_first_seen_order() {
        let mut alphabet = Alphabet::new();
        assert!(alphabet.register('b'));
        assert!(alphabet.register('a'));
        assert!(alphabet.register('c'));

        let order: Vec<char> = alphabet.symbols().collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut alphabet = Alphabet::new();
        assert!(alphabet.register('a'));
        assert!(!alphabet.register('a'));

        assert_eq!(alphabet.len(), 1);
        assert!(alphabet.contains('a'));
        assert!(!alphabet.contains('b'));
    }

    #[test]
    fn test_empty_alphabet() {
        let alphabet = Alphabet::new();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.symbols().count(), 0);
    }
}
