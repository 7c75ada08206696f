use tracing::trace;

use crate::prelude::*;

/// Helper struct for constructing a [`DFA`] from lists of symbols, states and transitions.
///
/// States that are mentioned by a transition, as start state or as final state are created
/// implicitly, as are the symbols that label transitions. Explicitly listed states and
/// symbols come first, everything else is added in order of first mention. The builder
/// only forwards to the mutators of [`DFA`], so building fails precisely when one of
/// those calls would be refused.
///
/// # Example
///
/// We want to create a DFA over the alphabet `['0', '1']` that accepts words containing at
/// least one `1`:
/// ```
/// use dfa::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_symbols("01".chars())
///     .with_start("q0")
///     .with_finals(["q1"])
///     .with_transitions([
///         ("q0", '0', "q0"),
///         ("q0", '1', "q1"),
///         ("q1", '0', "q1"),
///         ("q1", '1', "q1"),
///     ])
///     .build()
///     .unwrap();
/// assert!(dfa.accepts("0010"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DFABuilder {
    symbols: Vec<char>,
    states: Vec<String>,
    start: Option<String>,
    finals: Vec<String>,
    transitions: Vec<(String, char, String)>,
}

impl DFABuilder {
    /// Adds the given symbols to the alphabet.
    pub fn with_symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Adds states with the given names, in order.
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Sets the start state. A later call replaces an earlier one.
    pub fn with_start<S: Into<String>>(mut self, start: S) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Marks the given states as final.
    pub fn with_finals<I, S>(mut self, finals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.finals.extend(finals.into_iter().map(Into::into));
        self
    }

    /// Adds transitions given as `(from, symbol, to)` triples. If a pair of state and symbol
    /// appears more than once, the last triple wins.
    pub fn with_transitions<I, S, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, char, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(p, a, q)| (p.into(), a, q.into())),
        );
        self
    }

    /// Builds the automaton. Fails if a state name is empty or listed twice in
    /// [`DFABuilder::with_states`].
    pub fn build(self) -> Result<DFA, ConstructionError> {
        let mut dfa = DFA::new();
        for symbol in self
            .symbols
            .iter()
            .copied()
            .chain(self.transitions.iter().map(|(_, a, _)| *a))
        {
            dfa.add_symbol(symbol);
        }

        for name in &self.states {
            dfa.try_add_state(name)?;
        }
        let mentioned = self
            .start
            .iter()
            .chain(self.finals.iter())
            .chain(self.transitions.iter().flat_map(|(p, _, q)| [p, q]));
        for name in mentioned {
            if dfa.get_state(name).is_none() {
                dfa.try_add_state(name)?;
            }
        }

        if let Some(start) = &self.start {
            dfa.try_set_start(start)?;
        }
        for name in &self.finals {
            dfa.try_set_final(name)?;
        }
        for (from, symbol, to) in &self.transitions {
            dfa.try_add_transition(from, to, *symbol)?;
        }
        trace!(
            "built automaton with {} states and {} transitions",
            dfa.size(),
            dfa.transition_count()
        );
        Ok(dfa)
    }
}
