use tracing::debug;

use crate::{Nfa, Set, State, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Turns `self` into an automaton accepting the union of both languages.
    ///
    /// Both automata are completed over the joint alphabet and relabeled into disjoint ranges
    /// `q0, q1, ...`, then a fresh initial state is added that behaves like both original initial
    /// states at once. It is accepting iff one of them is. The result is non-deterministic at the
    /// new initial state whenever the two operands disagree on a symbol, so it has to be
    /// [determinized](Nfa::determinize) before minimizing it.
    pub fn union(&mut self, mut other: Nfa<S>) {
        self.align_alphabets(&mut other);
        self.complete();
        self.relabel_numeric(0);
        other.complete();
        other.relabel_numeric(self.size());

        let left_initial = self.initial.clone();
        let right_initial = other.initial.clone();
        let accepts_empty =
            self.finals.contains(&left_initial) || other.finals.contains(&right_initial);

        let mut new_transitions = Vec::with_capacity(self.alphabet.len());
        for a in &self.alphabet {
            let mut targets: Set<State> = Set::default();
            targets.extend(self.targets(&left_initial, a).into_iter().flatten().cloned());
            targets.extend(other.targets(&right_initial, a).into_iter().flatten().cloned());
            new_transitions.push((a.clone(), targets));
        }

        self.states.extend(other.states);
        self.finals.extend(other.finals);
        self.transitions.extend(other.transitions);

        let initial = State::fresh("qinit", &self.states);
        self.states.insert(initial.clone());
        if accepts_empty {
            self.finals.insert(initial.clone());
        }
        for (a, targets) in new_transitions {
            if !targets.is_empty() {
                self.insert_edge(initial.clone(), a, targets);
            }
        }
        self.initial = initial;
        debug!("union has {} states", self.size());
    }

    /// Like [`Nfa::union`], but leaves `other` untouched by working on a copy of it.
    pub fn union_with(&mut self, other: &Nfa<S>) {
        self.union(other.clone())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        tests::{a_or_ab, ends_with_ab, even_as, words_up_to},
        Nfa,
    };

    #[test]
    #[traced_test]
    fn union_accepts_both_languages() {
        let left = ends_with_ab();
        let right = even_as();
        let mut union = left.clone();
        union.union_with(&right);

        for word in words_up_to(&['a', 'b'], 7) {
            assert_eq!(
                union.accepts(word.iter().copied()),
                left.accepts(word.iter().copied()) || right.accepts(word.iter().copied()),
                "{:?}",
                word
            );
        }
        assert_eq!(right, even_as());
    }

    #[test]
    fn union_initial_accepts_empty_word() {
        let mut union = a_or_ab();
        union.union(even_as());
        assert!(union.accepts_str(""));
        assert!(union.is_final(union.initial().as_str()));
        assert!(union.contains_state("q0"));
        assert_eq!(union.initial().as_str(), "qinit0");
    }

    #[test]
    fn union_can_be_non_deterministic() {
        let mut union = a_or_ab();
        union.union(ends_with_ab());
        assert!(!union.is_deterministic());
        union.determinize();
        assert!(union.is_deterministic());
        assert!(union.accepts_str("a"));
        assert!(union.accepts_str("bab"));
        assert!(!union.accepts_str("b"));
    }

    #[test]
    fn union_merges_alphabets() {
        let mut only_c: Nfa = Nfa::new("p");
        only_c.add_state("r");
        only_c.add_symbol('c');
        only_c.set_transition("p", 'c', ["r"]).unwrap();
        only_c.set_final("r", true);

        let mut union = a_or_ab();
        union.union(only_c);
        assert_eq!(union.alphabet(), vec![&'a', &'b', &'c']);
        assert!(union.accepts_str("c"));
        assert!(union.accepts_str("ab"));
        assert!(!union.accepts_str("ac"));
        assert!(!union.accepts_str("cc"));
    }
}
