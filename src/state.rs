use std::{borrow::Borrow, fmt::Display};

use crate::Show;

/// A named state of an automaton. The name is the only identity a state has: two states
/// are equal precisely if their names are equal, and hashing as well as ordering only look
/// at the name.
///
/// States are created by the automaton that owns them and never shared between automata,
/// so a [`State`] is immutable once it exists.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    name: String,
}

impl State {
    /// Creates a state with the given `name`. Callers are responsible for ensuring that the
    /// name is non-empty, the automaton refuses empty names before ever reaching this point.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// `Hash` and `Eq` only consider `name`, so looking a state up by `&str` is consistent.
impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Show for State {
    fn show(&self) -> String {
        crate::show_name(&self.name)
    }
}

/// Position of a [`State`] in the arena of the automaton that owns it. Indices are only
/// meaningful for that automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateIndex(pub(crate) usize);

impl StateIndex {
    /// Returns the raw position.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for StateIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Display for StateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Show for StateIndex {
    fn show(&self) -> String {
        self.to_string()
    }
}
