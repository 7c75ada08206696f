use crate::{math::OrderedSet, Show};

/// The alphabet of an automaton, a collection of `char` symbols. Symbols are kept in the
/// order in which they were first added, adding a symbol twice has no effect.
///
/// # Example
/// ```
/// use dfa::prelude::*;
///
/// let mut alphabet = Alphabet::from("ab");
/// assert!(!alphabet.add('a'));
/// assert!(alphabet.add('c'));
/// assert_eq!(alphabet.universe().collect::<String>(), "abc");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Alphabet(OrderedSet<char>);

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol`, returning `true` if it was not present before.
    pub fn add(&mut self, symbol: char) -> bool {
        self.0.insert(symbol)
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no symbol has been added yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all symbols, in insertion order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for Alphabet {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

impl Show for Alphabet {
    fn show(&self) -> String {
        char::show_collection(self.0.iter())
    }
}

impl Show for char {
    fn show(&self) -> String {
        crate::show_name(self.encode_utf8(&mut [0; 4]))
    }
}

/// Relabeling that exchanges two symbols and leaves every other symbol untouched. If both
/// symbols coincide, this is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolSwap {
    left: char,
    right: char,
}

impl SymbolSwap {
    /// Creates the relabeling exchanging `left` and `right`.
    pub fn new(left: char, right: char) -> Self {
        Self { left, right }
    }

    /// Returns the image of `symbol`.
    pub fn apply(&self, symbol: char) -> char {
        if symbol == self.left {
            self.right
        } else if symbol == self.right {
            self.left
        } else {
            symbol
        }
    }

    /// Returns `true` if applying `self` never changes a symbol.
    pub fn is_identity(&self) -> bool {
        self.left == self.right
    }
}
