use thiserror::Error;

/// Reasons for which a construction call on a [`crate::DFA`] can be refused. None of them
/// is fatal: a refused call leaves the automaton exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ConstructionError {
    /// No state with the given name exists.
    #[error("no state named {0:?} exists")]
    UnknownState(String),
    /// A state with the given name already exists.
    #[error("a state named {0:?} already exists")]
    DuplicateState(String),
    /// State names must not be empty.
    #[error("state names must not be empty")]
    EmptyStateName,
    /// The symbol has not been added to the alphabet.
    #[error("symbol {0:?} is not part of the alphabet")]
    UnknownSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::ConstructionError;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            ConstructionError::UnknownState("q7".into()).to_string(),
            "no state named \"q7\" exists"
        );
        assert_eq!(
            ConstructionError::UnknownSymbol('x').to_string(),
            "symbol 'x' is not part of the alphabet"
        );
    }
}
