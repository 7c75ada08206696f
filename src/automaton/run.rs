use thiserror::Error;
use tracing::{debug, trace};

use crate::prelude::*;

/// The result of running a word on a [`DFA`]. A run is successful if every symbol of the
/// word could be consumed, whether the reached state is final is a separate question.
pub type RunResult = Result<Path, Rejection>;

/// The states visited by a successful run, together with the symbols consumed on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    origin: StateIndex,
    states: Vec<StateIndex>,
    symbols: Vec<char>,
}

impl Path {
    fn empty_with_capacity(origin: StateIndex, capacity: usize) -> Self {
        Self {
            origin,
            states: Vec::with_capacity(capacity),
            symbols: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, symbol: char, target: StateIndex) {
        self.symbols.push(symbol);
        self.states.push(target);
    }

    /// The state in which the run started.
    pub fn origin(&self) -> StateIndex {
        self.origin
    }

    /// The state in which the run ended.
    pub fn reached(&self) -> StateIndex {
        self.states.last().copied().unwrap_or(self.origin)
    }

    /// Number of transitions taken.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no transition was taken.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The consumed symbols.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Iterates over all visited states, beginning with the origin.
    pub fn state_sequence(&self) -> impl Iterator<Item = StateIndex> + '_ {
        std::iter::once(self.origin).chain(self.states.iter().copied())
    }
}

/// Why a run could not consume its whole input. None of these is a fault, each simply
/// means that the word is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The automaton has no start state.
    #[error("no start state has been set")]
    NoInitialState,
    /// The symbol at `position` does not belong to the alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// Position of the offending symbol in the input.
        position: usize,
        /// The offending symbol.
        symbol: char,
    },
    /// No transition is defined for the symbol at `position` in the state reached before it.
    #[error("no transition from {state} on {symbol:?} at position {position}")]
    MissingTransition {
        /// Position of the symbol that could not be consumed.
        position: usize,
        /// Name of the state in which the run got stuck.
        state: String,
        /// The symbol that could not be consumed.
        symbol: char,
    },
}

impl DFA {
    /// Runs `input` from the start state, see [`Word::parse`] for how the empty word is
    /// written.
    pub fn run(&self, input: &str) -> RunResult {
        self.run_word(Word::parse(input))
    }

    /// Runs `word` from the start state. The run stops at the first symbol that is either
    /// outside the alphabet or has no transition from the current state.
    pub fn run_word(&self, word: Word<'_>) -> RunResult {
        let origin = self.initial.ok_or(Rejection::NoInitialState)?;
        let mut path = Path::empty_with_capacity(origin, word.len());
        for (position, symbol) in word.symbols().enumerate() {
            if !self.alphabet.contains(symbol) {
                return Err(Rejection::UnknownSymbol { position, symbol });
            }
            let current = path.reached();
            match self.successor(current, symbol) {
                Some(target) => {
                    trace!("{current} -{symbol:?}-> {target}");
                    path.push(symbol, target);
                }
                None => {
                    return Err(Rejection::MissingTransition {
                        position,
                        state: self.state_name(current),
                        symbol,
                    })
                }
            }
        }
        Ok(path)
    }

    /// Decides whether `input` is accepted, i.e. whether the run on it consumes every symbol
    /// and ends in a final state. The sentinel `"e"` (as well as `""`) stands for the empty
    /// word, which is accepted iff the start state is final.
    ///
    /// Without a start state nothing is accepted.
    pub fn accepts(&self, input: &str) -> bool {
        let word = Word::parse(input);
        match self.run_word(word.clone()) {
            Ok(path) => {
                let accepted = self.finals.contains(&path.reached());
                trace!("{} ends in {}, accepted: {accepted}", word.show(), path.reached());
                accepted
            }
            Err(rejection) => {
                debug!("rejecting {}: {rejection}", word.show());
                false
            }
        }
    }

    fn state_name(&self, idx: StateIndex) -> String {
        self.state(idx)
            .map(|state| state.name().to_string())
            .unwrap_or_else(|| idx.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::contains_one};

    #[test_log::test]
    fn contains_one_acceptance() {
        let dfa = contains_one();
        assert!(dfa.accepts("0110"));
        assert!(dfa.accepts("1"));
        assert!(!dfa.accepts("000"));
        assert!(!dfa.accepts("e"));
        assert!(!dfa.accepts(""));
    }

    #[test_log::test]
    fn empty_word_is_decided_by_start_state() {
        let mut dfa = contains_one();
        dfa.set_final("q0");
        assert!(dfa.accepts("e"));
        assert!(dfa.accepts(""));
        // "ee" is a genuine word and 'e' is not a symbol
        assert!(!dfa.accepts("ee"));
    }

    #[test_log::test]
    fn sentinel_is_not_read_as_a_symbol() {
        let mut dfa = DFA::new();
        dfa.add_symbol('e');
        dfa.add_state("q0");
        dfa.add_state("q1");
        dfa.set_start("q0");
        dfa.set_final("q1");
        dfa.add_transition("q0", "q1", 'e');
        dfa.add_transition("q1", "q1", 'e');

        assert!(!dfa.accepts("e"));
        assert!(dfa.run("e").unwrap().is_empty());

        assert!(dfa.accepts("ee"));
        let path = dfa.run("ee").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.reached(), StateIndex(1));
    }

    #[test_log::test]
    fn no_start_state_rejects_everything() {
        let mut dfa = DFA::new();
        dfa.add_symbol('a');
        dfa.add_state("q");
        dfa.set_final("q");
        dfa.add_transition("q", "q", 'a');
        assert!(!dfa.accepts("e"));
        assert!(!dfa.accepts("a"));
        assert_eq!(dfa.run("a"), Err(Rejection::NoInitialState));
    }

    #[test_log::test]
    fn unknown_symbols_reject() {
        let dfa = contains_one();
        assert!(!dfa.accepts("012"));
        assert_eq!(
            dfa.run("10x1"),
            Err(Rejection::UnknownSymbol {
                position: 2,
                symbol: 'x'
            })
        );
    }

    #[test_log::test]
    fn missing_transitions_reject() {
        let mut dfa = DFA::new();
        dfa.add_symbol('a');
        dfa.add_symbol('b');
        dfa.add_state("p");
        dfa.add_state("q");
        dfa.set_start("p");
        dfa.set_final("q");
        dfa.add_transition("p", "q", 'a');
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts("ab"));
        assert_eq!(
            dfa.run("ab"),
            Err(Rejection::MissingTransition {
                position: 1,
                state: "q".into(),
                symbol: 'b'
            })
        );
    }

    #[test_log::test]
    fn path_records_the_run() {
        let dfa = contains_one();
        let path = dfa.run("010").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.symbols(), &['0', '1', '0']);
        assert_eq!(path.origin(), StateIndex(0));
        assert_eq!(path.reached(), StateIndex(1));
        assert_eq!(
            path.state_sequence().map(|q| q.index()).collect::<Vec<_>>(),
            vec![0, 0, 1, 1]
        );

        let empty = dfa.run("e").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.reached(), StateIndex(0));
    }

    #[test_log::test]
    fn runs_are_repeatable_between_mutations() {
        let mut dfa = contains_one();
        assert!(!dfa.accepts("0"));
        dfa.set_final("q0");
        assert!(dfa.accepts("0"));
        assert!(dfa.accepts("0"));
    }
}
