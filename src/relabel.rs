use itertools::Itertools;
use tracing::trace;

use crate::{AutomatonError, Map, Nfa, Result, Set, State, Symbol};

/// Largest automaton that can be relabeled with single letters.
const LETTERS: usize = 26;

impl<S: Symbol> Nfa<S> {
    /// Renames the states to `q{begin_at}`, `q{begin_at + 1}`, ..., where the initial state
    /// receives `q{begin_at}` and the remaining states are numbered in the order of their
    /// current labels.
    pub fn relabel_numeric(&mut self, begin_at: usize) {
        let mapping: Map<State, State> = self
            .ordered_states()
            .into_iter()
            .enumerate()
            .map(|(i, q)| (q, State::new(format!("q{}", begin_at + i))))
            .collect();
        self.rename(&mapping);
    }

    /// Renames the initial state to `S` and the remaining states to `A`, `B`, ... in the order of
    /// their current labels, skipping `S`. Fails with
    /// [`AutomatonError::StateBudgetExceeded`] if there are more than 26 states.
    pub fn relabel_alphabetic(&mut self) -> Result<()> {
        if self.size() > LETTERS {
            return Err(AutomatonError::StateBudgetExceeded {
                states: self.size(),
                max: LETTERS,
            });
        }
        let letters = ('A'..='Z').filter(|c| *c != 'S');
        let mut ordered = self.ordered_states().into_iter();
        let mut mapping: Map<State, State> = Map::default();
        if let Some(initial) = ordered.next() {
            mapping.insert(initial, State::from("S"));
        }
        for (q, letter) in ordered.zip(letters) {
            mapping.insert(q, State::new(letter.to_string()));
        }
        self.rename(&mapping);
        Ok(())
    }

    fn ordered_states(&self) -> Vec<State> {
        self.states().into_iter().cloned().collect()
    }

    /// Applies `mapping` to every occurrence of a state. The mapping has to be injective and
    /// defined on all states.
    fn rename(&mut self, mapping: &Map<State, State>) {
        let get = |q: &State| -> State {
            mapping
                .get(q)
                .cloned()
                .expect("the renaming is defined on all states")
        };
        trace!(
            "renaming {}",
            mapping
                .iter()
                .sorted()
                .map(|(from, to)| format!("{from} -> {to}"))
                .join(", ")
        );

        self.initial = get(&self.initial);
        self.states = self.states.iter().map(get).collect();
        self.finals = self.finals.iter().map(get).collect();
        self.transitions = std::mem::take(&mut self.transitions)
            .into_iter()
            .map(|(q, row)| {
                let row: Map<S, Set<State>> = row
                    .into_iter()
                    .map(|(a, targets)| (a, targets.iter().map(get).collect()))
                    .collect();
                (get(&q), row)
            })
            .collect();
    }
}
