use tracing::debug;

use crate::{Nfa, Set, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Turns the automaton into one accepting exactly the words over its alphabet which it
    /// rejected before. The automaton is determinized and completed first, so that every word
    /// has exactly one run, then accepting and rejecting states are swapped.
    pub fn complement(&mut self) {
        self.determinize();
        self.complete();
        let flipped: Set<_> = self
            .states
            .iter()
            .filter(|q| !self.finals.contains(*q))
            .cloned()
            .collect();
        debug!(
            "complementing {} accepting into {} accepting states",
            self.finals.len(),
            flipped.len()
        );
        self.finals = flipped;
    }

    /// Extends the alphabets of `self` and `other` to their union. Symbols that are new to an
    /// automaton have no transitions in it.
    pub(crate) fn align_alphabets(&mut self, other: &mut Nfa<S>) {
        self.alphabet.extend(other.alphabet.iter().cloned());
        other.alphabet.extend(self.alphabet.iter().cloned());
    }
}
