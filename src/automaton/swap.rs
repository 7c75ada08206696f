use tracing::trace;

use crate::prelude::*;

impl DFA {
    /// Builds an independent copy of `self` in which every transition on `left` is moved to
    /// `right` and vice versa. Transitions on other symbols, the states, the start state and
    /// the final states are copied unchanged, and the copy shares nothing with `self`.
    ///
    /// If both or neither of the two symbols belong to the alphabet, the copy has the same
    /// alphabet, in the same order. If only one of them belongs to it, the alphabet of the copy
    /// differs from that of `self`: the symbol is replaced in place by its partner. This way no
    /// transition is lost in the copy and swapping twice restores the original automaton.
    /// Swapping a symbol with itself yields a plain copy.
    ///
    /// # Example
    /// ```
    /// use dfa::prelude::*;
    ///
    /// let dfa = DFA::builder()
    ///     .with_start("q0")
    ///     .with_finals(["q1"])
    ///     .with_transitions([("q0", 'a', "q1")])
    ///     .build()
    ///     .unwrap();
    /// let swapped = dfa.swap('a', 'b');
    /// assert_eq!(swapped.get_transition("q0", 'b'), Some("q1"));
    /// assert_eq!(swapped.get_transition("q0", 'a'), None);
    /// assert!(swapped.accepts("b"));
    /// ```
    pub fn swap(&self, left: char, right: char) -> DFA {
        let relabel = SymbolSwap::new(left, right);
        let mut target = DFA::new();

        for symbol in self.alphabet.universe() {
            let image = relabel.apply(symbol);
            target.add_symbol(if self.alphabet.contains(image) {
                symbol
            } else {
                image
            });
        }
        for state in &self.states {
            target.add_state(state.name());
        }
        if let Some(q0) = self.initial() {
            target.set_start(q0.name());
        }
        for q in self.final_states() {
            target.set_final(q.name());
        }
        for (source, symbol, destination) in self.transitions() {
            target.add_transition(source.name(), destination.name(), relabel.apply(symbol));
        }

        trace!(
            "swapped {left:?} and {right:?}, copied {} states and {} transitions",
            target.size(),
            target.transition_count()
        );
        target
    }
}
