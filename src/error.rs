use itertools::Itertools;
use thiserror::Error;

use crate::State;

/// Errors surfaced by the operations on an [`Nfa`](crate::Nfa). None of them are transient, they
/// indicate that the caller violated the precondition of the operation.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// A transition, the initial state or a final state refers to states that do not exist.
    #[error("state(s) {} do not exist", .states.iter().join(", "))]
    InvalidStateReference {
        /// The offending state labels.
        states: Vec<State>,
    },
    /// The operation is only defined for deterministic automata.
    #[error("automaton is non-deterministic")]
    DeterminismRequired,
    /// Alphabetic relabeling ran out of letters.
    #[error("too many states: {states} (max: {max})")]
    StateBudgetExceeded {
        /// Number of states of the automaton.
        states: usize,
        /// Maximal number of states the relabeling supports.
        max: usize,
    },
    /// A transition uses a symbol that is not part of the alphabet.
    #[error("symbol {0} is not part of the alphabet")]
    UnknownSymbol(String),
    /// The grammar does not list any productions for its initial symbol.
    #[error("no productions for initial symbol {0}")]
    MissingProductions(char),
    /// A production is neither the empty word nor a terminal optionally followed by a
    /// non-terminal.
    #[error("malformed production {production:?} of {non_terminal}")]
    MalformedProduction {
        /// The non-terminal the production belongs to.
        non_terminal: char,
        /// The production itself.
        production: String,
    },
    /// Reading or writing a record failed.
    #[error("could not access automaton file: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be (de)serialized.
    #[error("malformed automaton record: {0}")]
    Json(#[from] serde_json::Error),
}

impl AutomatonError {
    pub(crate) fn missing<I: IntoIterator<Item = State>>(states: I) -> Self {
        AutomatonError::InvalidStateReference {
            states: states.into_iter().sorted().dedup().collect(),
        }
    }
}

/// Result type for operations on automata.
pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_reference_lists_sorted_states() {
        let err = AutomatonError::missing([State::from("q3"), State::from("q1"), "q3".into()]);
        assert_eq!(err.to_string(), "state(s) q1, q3 do not exist");
    }

    #[test]
    fn budget_message() {
        let err = AutomatonError::StateBudgetExceeded { states: 30, max: 26 };
        assert_eq!(err.to_string(), "too many states: 30 (max: 26)");
    }
}
