use tracing::{debug, trace};

use crate::{
    math::{OrderedMap, OrderedSet},
    prelude::*,
};

mod display;
mod run;
mod swap;

pub use run::{Path, Rejection, RunResult};

/// A deterministic finite automaton (DFA), the 5-tuple (Q, Σ, δ, q0, F). It is built
/// incrementally: symbols, states and transitions can only be added, never removed.
///
/// States live in an arena, the [`StateIndex`] of a state is its position in insertion
/// order. The transition function δ is partial and stored per state as a map from symbol to
/// the index of the successor. Every index stored in `self` points into its own arena, so
/// no two automata ever share a state.
///
/// The boolean mutators ([`DFA::add_state`], [`DFA::set_start`], [`DFA::set_final`] and
/// [`DFA::add_transition`]) report refused calls by returning `false`. Their `try_` variants
/// return the reason as a [`ConstructionError`] instead. In either case a refused call does
/// not modify the automaton.
///
/// # Example
/// ```
/// use dfa::prelude::*;
///
/// let mut dfa = DFA::new();
/// dfa.add_symbol('0');
/// dfa.add_symbol('1');
/// assert!(dfa.add_state("q0"));
/// assert!(dfa.add_state("q1"));
/// assert!(dfa.set_start("q0"));
/// assert!(dfa.set_final("q1"));
/// assert!(dfa.add_transition("q0", "q0", '0'));
/// assert!(dfa.add_transition("q0", "q1", '1'));
/// assert!(dfa.add_transition("q1", "q1", '0'));
/// assert!(dfa.add_transition("q1", "q1", '1'));
///
/// assert!(dfa.accepts("0110"));
/// assert!(!dfa.accepts("000"));
/// assert!(dfa.swap('0', '1').accepts("1001"));
/// ```
#[derive(Clone, Default)]
pub struct DFA {
    alphabet: Alphabet,
    states: OrderedSet<State>,
    transitions: Vec<OrderedMap<char, StateIndex>>,
    initial: Option<StateIndex>,
    finals: OrderedSet<StateIndex>,
}

impl DFA {
    /// Creates an automaton without symbols, states, start state or final states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`DFABuilder`] for constructing an automaton from lists of states and edges.
    pub fn builder() -> DFABuilder {
        DFABuilder::default()
    }

    /// Adds `symbol` to the alphabet. Adding a symbol that is already present has no effect.
    pub fn add_symbol(&mut self, symbol: char) {
        if self.alphabet.add(symbol) {
            trace!("added symbol {symbol:?}");
        }
    }

    /// Adds a state with the given `name`, returning its index. Fails if the name is empty
    /// or if a state of that name exists already.
    pub fn try_add_state(&mut self, name: &str) -> Result<StateIndex, ConstructionError> {
        if name.is_empty() {
            debug!("refusing to add state with empty name");
            return Err(ConstructionError::EmptyStateName);
        }
        if self.states.contains(name) {
            debug!("refusing to add state {name:?}, it exists already");
            return Err(ConstructionError::DuplicateState(name.to_string()));
        }
        let (position, _) = self.states.insert_full(State::new(name));
        self.transitions.push(OrderedMap::default());
        let idx = StateIndex(position);
        trace!("added state {name:?} with index {idx}");
        Ok(idx)
    }

    /// Adds a state with the given `name`. Returns `false` and leaves `self` unchanged
    /// if such a state exists already (or `name` is empty).
    pub fn add_state(&mut self, name: &str) -> bool {
        self.try_add_state(name).is_ok()
    }

    /// Makes the state called `name` the start state, replacing a previously set one.
    pub fn try_set_start(&mut self, name: &str) -> Result<StateIndex, ConstructionError> {
        let idx = self.lookup(name)?;
        self.initial = Some(idx);
        trace!("start state is now {name:?}");
        Ok(idx)
    }

    /// Makes the state called `name` the start state. Returns `false` if no such state exists.
    pub fn set_start(&mut self, name: &str) -> bool {
        self.try_set_start(name).is_ok()
    }

    /// Marks the state called `name` as final. Marking a state twice has no further effect.
    pub fn try_set_final(&mut self, name: &str) -> Result<StateIndex, ConstructionError> {
        let idx = self.lookup(name)?;
        if self.finals.insert(idx) {
            trace!("marked {name:?} as final");
        }
        Ok(idx)
    }

    /// Marks the state called `name` as final. Returns `false` if no such state exists.
    pub fn set_final(&mut self, name: &str) -> bool {
        self.try_set_final(name).is_ok()
    }

    /// Sets δ(`from`, `symbol`) to `to`, overwriting a transition that may already exist for
    /// the pair. On success the previous successor (if any) is returned.
    ///
    /// Both states must exist and `symbol` must be part of the alphabet, otherwise nothing
    /// is changed.
    pub fn try_add_transition(
        &mut self,
        from: &str,
        to: &str,
        symbol: char,
    ) -> Result<Option<StateIndex>, ConstructionError> {
        if !self.alphabet.contains(symbol) {
            debug!("refusing transition {from:?} -{symbol:?}-> {to:?}, unknown symbol");
            return Err(ConstructionError::UnknownSymbol(symbol));
        }
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        let previous = self.transitions[source.0].insert(symbol, target);
        trace!("added transition {from:?} -{symbol:?}-> {to:?}");
        Ok(previous)
    }

    /// Sets δ(`from`, `symbol`) to `to`. Returns `false` without changing anything if one of
    /// the states does not exist or `symbol` is not in the alphabet.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: char) -> bool {
        self.try_add_transition(from, to, symbol).is_ok()
    }

    /// Returns the name of δ(`from`, `symbol`), if `from` exists and the transition is defined.
    pub fn get_transition(&self, from: &str, symbol: char) -> Option<&str> {
        let source = self.index_of(from)?;
        self.successor(source, symbol)
            .and_then(|target| self.state(target))
            .map(State::name)
    }

    /// Returns the index of δ(`origin`, `symbol`), if it is defined.
    pub fn successor(&self, origin: StateIndex, symbol: char) -> Option<StateIndex> {
        self.transitions.get(origin.0)?.get(&symbol).copied()
    }

    /// Returns the alphabet.
    pub fn get_sigma(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the state called `name`, if it exists.
    pub fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Returns `true` if `name` is the start state. Unknown names are never the start state.
    pub fn is_start(&self, name: &str) -> bool {
        self.index_of(name)
            .is_some_and(|idx| self.initial == Some(idx))
    }

    /// Returns `true` if `name` is a final state. Unknown names are never final.
    pub fn is_final(&self, name: &str) -> bool {
        self.index_of(name)
            .is_some_and(|idx| self.finals.contains(&idx))
    }

    /// Returns the index of the state called `name`.
    pub fn index_of(&self, name: &str) -> Option<StateIndex> {
        self.states.get_index_of(name).map(StateIndex)
    }

    /// Returns the state with the given index.
    pub fn state(&self, idx: StateIndex) -> Option<&State> {
        self.states.get_index(idx.0)
    }

    /// Iterates over all states in the order in which they were added.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no state has been added yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the start state, if one has been set.
    pub fn initial(&self) -> Option<&State> {
        self.initial.and_then(|idx| self.state(idx))
    }

    /// Iterates over the final states in the order in which they were marked.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.finals.iter().filter_map(|idx| self.state(*idx))
    }

    /// Iterates over all transitions as `(from, symbol, to)` triples. Transitions are grouped
    /// by their source state (in state order), and within one state they appear in the order
    /// in which their symbol was first given a transition.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, char, &State)> + '_ {
        self.states
            .iter()
            .zip(self.transitions.iter())
            .flat_map(move |(source, edges)| {
                edges.iter().filter_map(move |(symbol, target)| {
                    self.state(*target).map(|target| (source, *symbol, target))
                })
            })
    }

    /// Returns the number of defined transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.iter().map(|edges| edges.len()).sum()
    }

    fn lookup(&self, name: &str) -> Result<StateIndex, ConstructionError> {
        self.index_of(name).ok_or_else(|| {
            debug!("no state named {name:?}");
            ConstructionError::UnknownState(name.to_string())
        })
    }
}

/// Two automata are equal if they have the same alphabet and the same states (both compared
/// as sets), the same start and final states and the same transitions, all compared by name.
/// The order in which anything was added does not matter.
impl PartialEq for DFA {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet
            && self.states == other.states
            && self.initial().map(State::name) == other.initial().map(State::name)
            && self.finals.len() == other.finals.len()
            && self.final_states().all(|q| other.is_final(q.name()))
            && self.transition_count() == other.transition_count()
            && self
                .transitions()
                .all(|(p, a, q)| other.get_transition(p.name(), a) == Some(q.name()))
    }
}

impl Eq for DFA {}
