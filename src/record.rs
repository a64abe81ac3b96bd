use std::path::Path;

use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AutomatonError, Nfa, Result, Set, State, Symbol};

/// A single transition as it is persisted: `[state, symbol, [targets...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord<S>(pub State, pub S, pub Vec<State>);

/// Flat representation of an [`Nfa`] that is used for persisting automata. All lists are sorted
/// when the record is produced from an automaton, so equal automata yield equal records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<S> {
    /// All states.
    pub states: Vec<State>,
    /// All symbols.
    pub alphabet: Vec<S>,
    /// The transition relation.
    pub transitions: Vec<TransitionRecord<S>>,
    /// The initial state.
    pub initial_state: State,
    /// The accepting states.
    pub final_states: Vec<State>,
}

impl<S: Symbol> Nfa<S> {
    /// Produces the persistable [`Record`] of this automaton.
    pub fn to_record(&self) -> Record<S> {
        Record {
            states: self.states.iter().sorted().cloned().collect(),
            alphabet: self.alphabet().into_iter().cloned().collect(),
            transitions: self
                .transitions()
                .into_iter()
                .map(|(q, a, targets)| {
                    TransitionRecord(q.clone(), a.clone(), targets.into_iter().cloned().collect())
                })
                .collect(),
            initial_state: self.initial.clone(),
            final_states: self.final_states().into_iter().cloned().collect(),
        }
    }
}

impl<S: Symbol> TryFrom<Record<S>> for Nfa<S> {
    type Error = AutomatonError;

    /// Rebuilds an automaton, verifying that every state and symbol that is referenced is also
    /// declared.
    fn try_from(record: Record<S>) -> Result<Self> {
        let states: Set<State> = record.states.into_iter().collect();
        let referenced = std::iter::once(&record.initial_state)
            .chain(record.final_states.iter())
            .chain(
                record
                    .transitions
                    .iter()
                    .flat_map(|TransitionRecord(q, _, targets)| std::iter::once(q).chain(targets)),
            );
        let missing = referenced
            .filter(|q| !states.contains(*q))
            .cloned()
            .collect_vec();
        if !missing.is_empty() {
            return Err(AutomatonError::missing(missing));
        }

        let mut nfa = Nfa::new(record.initial_state);
        nfa.states = states;
        nfa.alphabet = record.alphabet.into_iter().collect();
        nfa.finals = record.final_states.into_iter().collect();
        for TransitionRecord(q, a, targets) in record.transitions {
            if targets.is_empty() {
                warn!("dropping transition from {q} on {a} without targets");
                continue;
            }
            if !nfa.alphabet.contains(&a) {
                return Err(AutomatonError::UnknownSymbol(a.to_string()));
            }
            nfa.transitions
                .entry(q)
                .or_default()
                .entry(a)
                .or_default()
                .extend(targets);
        }
        Ok(nfa)
    }
}

impl<S: Symbol + Serialize> Nfa<S> {
    /// Serializes the automaton as pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.to_record().serialize(&mut serializer)?;
        String::from_utf8(out)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    /// Writes the automaton to the file at `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("saving automaton with {} states to {}", self.size(), path.display());
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl<S: Symbol + DeserializeOwned> Nfa<S> {
    /// Parses an automaton from JSON produced by [`Nfa::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Record<S> = serde_json::from_str(json)?;
        Nfa::try_from(record)
    }

    /// Reads an automaton from the JSON file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading automaton from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
