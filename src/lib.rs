//! Library for building and running deterministic finite automata (DFA) in Rust.
//!
//! A DFA is the 5-tuple $(Q, \Sigma, \delta, q_0, F)$ of states, alphabet, (partial) transition
//! function, start state and final states. A [`DFA`] is built incrementally: symbols, states and
//! transitions are added one by one through mutators that refuse invalid input instead of
//! panicking, the start state is set and states are marked as final. Nothing is ever removed.
//!
//! Once built, the automaton can be queried with [`DFA::accepts`], which runs a word from the
//! start state and accepts if every symbol can be consumed and the reached state is final.
//! The input `"e"` stands for the empty word (see [`word::Word`]). For more insight into why a
//! word is rejected, [`DFA::run`] returns the [`automaton::Path`] of a successful run or the
//! [`automaton::Rejection`] that stopped it.
//!
//! The only transformation is [`DFA::swap`], which produces an independent copy of the
//! automaton in which two symbols exchange their role on every transition.
//!
//! States are identified by their names. Internally they live in an arena and are referred to
//! by [`StateIndex`], which keeps copies cheap and guarantees that two automata never share a
//! state.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use itertools::Itertools;

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, SymbolSwap},
        automaton::{Path, Rejection, RunResult, DFA},
        builder::DFABuilder,
        error::ConstructionError,
        math,
        state::{State, StateIndex},
        word::{Word, EMPTY_WORD_SENTINEL},
        Show,
    };
}

/// This module contains type aliases for the collections used throughout the crate.
pub mod math;

/// Defines the errors reported by refused construction calls.
pub mod error;
pub use error::ConstructionError;

/// Defines states and their indices.
pub mod state;
pub use state::{State, StateIndex};

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;
pub use alphabet::Alphabet;

/// Module that contains the interpretation of input strings as words.
pub mod word;

/// Defines the deterministic finite automaton, its runs and the symbol swap.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;
pub use automaton::DFA;

/// Declarative construction of automata.
#[allow(clippy::upper_case_acronyms)]
pub mod builder;

/// Helper trait which can be used to display states, symbols and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state that should be its
    /// name and for a symbol just the symbol itself. This is mainly used for debugging purposes.
    fn show(&self) -> String;
    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(Show::show).join(", "))
    }
}

/// Quotes `s` if it is empty or contains whitespace or one of the separators used by
/// [`Show::show_collection`], so that collections of names can always be split apart again.
pub(crate) fn show_name(s: &str) -> String {
    if s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '{' | '}' | '"'))
    {
        format!("{s:?}")
    } else {
        s.to_string()
    }
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// The automaton over `{0, 1}` accepting exactly the words that contain at least one `1`.
    pub fn contains_one() -> DFA {
        let mut dfa = DFA::new();
        dfa.add_symbol('0');
        dfa.add_symbol('1');
        dfa.add_state("q0");
        dfa.add_state("q1");
        dfa.set_start("q0");
        dfa.set_final("q1");
        dfa.add_transition("q0", "q0", '0');
        dfa.add_transition("q0", "q1", '1');
        dfa.add_transition("q1", "q1", '0');
        dfa.add_transition("q1", "q1", '1');
        dfa
    }

    #[test]
    fn show_collections() {
        assert_eq!(
            vec![State::new("q0"), State::new("q1")].show(),
            "{q0, q1}"
        );
        assert_eq!(
            vec![State::new("q 0"), State::new("{q1}"), State::new("a,\"b")].show(),
            r#"{"q 0", "{q1}", "a,\"b"}"#
        );
        assert_eq!(vec![',', 'a', ' '].show(), r#"{",", a, " "}"#);
    }
}
