use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::prelude::*;

impl DFA {
    /// Returns a string representation of the transition table. There is one row per state
    /// and one column per symbol, undefined transitions are shown as `-`.
    #[cfg(feature = "table")]
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.universe().map(|s| s.show())),
        );
        for (idx, state) in self.states.iter().enumerate() {
            let mut row = vec![state.show()];
            for sym in self.alphabet.universe() {
                match self.successor(StateIndex(idx), sym).and_then(|q| self.state(q)) {
                    Some(target) => row.push(target.show()),
                    None => row.push("-".to_string()),
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::ascii())
            .to_string()
    }

    /// Returns a string representation of the transition table, one `p -a-> q` line per
    /// transition.
    #[cfg(not(feature = "table"))]
    pub fn build_transition_table(&self) -> String {
        self.transitions()
            .map(|(p, a, q)| format!("  {} -{}-> {}", p.show(), a.show(), q.show()))
            .join("\n")
    }
}

/// Renders the five components of the automaton, one per line, in insertion order:
///
/// ```text
/// Q = {q0, q1}
/// Sigma = {0, 1}
/// delta =
/// <transition table>
/// q0 = q0
/// F = {q1}
/// ```
///
/// Names and symbols containing whitespace, quotes, commas or braces are quoted.
impl Display for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Q = {}", State::show_collection(self.states()))?;
        writeln!(f, "Sigma = {}", self.alphabet.show())?;
        writeln!(f, "delta =")?;
        writeln!(f, "{}", self.build_transition_table())?;
        writeln!(
            f,
            "q0 = {}",
            self.initial().map(Show::show).unwrap_or_default()
        )?;
        write!(f, "F = {}", State::show_collection(self.final_states()))
    }
}

impl Debug for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DFA")
            .field("states", &self.states().collect_vec())
            .field("alphabet", &self.alphabet)
            .field(
                "transitions",
                &self
                    .transitions()
                    .map(|(p, a, q)| (p.show(), a, q.show()))
                    .collect_vec(),
            )
            .field("initial", &self.initial())
            .field("finals", &self.final_states().collect_vec())
            .finish()
    }
}
