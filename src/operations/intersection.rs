use crate::{Nfa, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Turns `self` into an automaton accepting exactly the words accepted by both automata. The
    /// construction follows De Morgan's law: both operands are complemented over the joint
    /// alphabet, united and the result is complemented again, so the outcome is deterministic and
    /// complete.
    pub fn intersection(&mut self, mut other: Nfa<S>) {
        self.align_alphabets(&mut other);
        other.complement();
        self.complement();
        self.union(other);
        self.complement();
    }

    /// Like [`Nfa::intersection`], but leaves `other` untouched by working on a copy of it.
    pub fn intersection_with(&mut self, other: &Nfa<S>) {
        self.intersection(other.clone())
    }
}
