use tracing::debug;

use crate::{Nfa, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Returns `true` if every word accepted by `other` is also accepted by `self`. This holds
    /// iff the intersection of `other` with the complement of `self` is empty. Both automata are
    /// left untouched, the check works on copies.
    pub fn contains(&self, other: &Nfa<S>) -> bool {
        let mut complement = self.clone();
        let mut candidate = other.clone();
        candidate.align_alphabets(&mut complement);
        complement.complement();
        candidate.intersection(complement);
        let contained = candidate.is_empty();
        debug!("containment check yields {contained}");
        contained
    }

    /// Returns `true` if both automata accept the same language.
    pub fn is_equal(&self, other: &Nfa<S>) -> bool {
        self.contains(other) && other.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        random::random_nfa,
        tests::{a_or_ab, ends_with_ab, even_as},
        Nfa,
    };

    #[test]
    #[traced_test]
    fn automaton_contains_itself() {
        for nfa in [a_or_ab(), ends_with_ab(), even_as()] {
            assert!(nfa.contains(&nfa));
            assert!(nfa.is_equal(&nfa));
        }
    }

    #[test]
    fn containment_is_strict() {
        let mut ab: Nfa = Nfa::new("0");
        ab.add_state("1");
        ab.add_state("2");
        ab.add_symbol('a');
        ab.add_symbol('b');
        ab.set_transition("0", 'a', ["1"]).unwrap();
        ab.set_transition("1", 'b', ["2"]).unwrap();
        ab.set_final("2", true);

        assert!(ends_with_ab().contains(&ab));
        assert!(a_or_ab().contains(&ab));
        assert!(!ab.contains(&ends_with_ab()));
        assert!(!ab.contains(&a_or_ab()));
        assert!(!ends_with_ab().contains(&a_or_ab()));
    }

    #[test]
    fn equal_finite_languages() {
        // a non-deterministic automaton for {a, ab}
        let mut nfa: Nfa = Nfa::new("s");
        for q in ["x", "y", "z"] {
            nfa.add_state(q);
        }
        nfa.add_symbol('a');
        nfa.add_symbol('b');
        nfa.set_transition("s", 'a', ["x", "y"]).unwrap();
        nfa.set_transition("y", 'b', ["z"]).unwrap();
        nfa.set_final("x", true);
        nfa.set_final("z", true);

        let dfa = a_or_ab();
        assert!(nfa.is_equal(&dfa));
        assert!(dfa.is_equal(&nfa));
        assert!(!nfa.is_equal(&ends_with_ab()));
    }

    #[test]
    fn queries_do_not_mutate() {
        let left = ends_with_ab();
        let right = a_or_ab();
        let _ = left.contains(&right);
        let _ = left.is_equal(&right);
        let _ = left.is_empty();
        let _ = left.is_finite();
        assert_eq!(left, ends_with_ab());
        assert_eq!(right, a_or_ab());
    }

    #[test]
    fn foreign_symbols_break_containment() {
        let mut with_c = a_or_ab();
        with_c.add_symbol('c');
        with_c.add_state("3");
        with_c.set_transition("0", 'c', ["3"]).unwrap();
        with_c.set_final("3", true);

        assert!(with_c.contains(&a_or_ab()));
        assert!(!a_or_ab().contains(&with_c));
    }

    #[test]
    fn determinized_and_minimized_automata_are_equal() {
        let mut rng = fastrand::Rng::with_seed(1234);
        for _ in 0..10 {
            let original = random_nfa(&mut rng, 4, &['a', 'b'], 0.35);
            let mut minimal = original.clone();
            minimal.determinize();
            minimal.minimize().unwrap();
            assert!(original.is_equal(&minimal));
        }
    }
}
