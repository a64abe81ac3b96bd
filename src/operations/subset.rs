use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{Map, Nfa, Set, State, Symbol};

/// Picks the label for the state representing `subset`. The label lists the members, if that
/// would clash with an existing state a numbered variant is used instead.
fn composite_label(subset: &BTreeSet<State>, taken: &Set<State>) -> State {
    let candidate = State::new(format!("{{{}}}", subset.iter().join(",")));
    if taken.contains(&candidate) {
        State::fresh(candidate.as_str(), taken)
    } else {
        candidate
    }
}

impl<S: Symbol> Nfa<S> {
    /// Determinizes the automaton through the subset construction.
    ///
    /// Every set of states that is the target of a non-deterministic transition is materialized
    /// as a new composite state, which is accepting if one of its members is. The transitions of a
    /// composite state are the unions of the transitions of its members. Afterwards each transition
    /// is redirected to the state representing its target set and states that became unreachable
    /// are removed. The accepted language does not change.
    pub fn determinize(&mut self) {
        let mut composites: Map<BTreeSet<State>, State> = Map::default();
        let mut queue: Vec<BTreeSet<State>> = self
            .edges()
            .filter(|(_, _, targets)| targets.len() > 1)
            .map(|(_, _, targets)| targets.iter().cloned().collect())
            .collect();

        while let Some(subset) = queue.pop() {
            if composites.contains_key(&subset) {
                continue;
            }
            let label = composite_label(&subset, &self.states);
            trace!("registering composite {label} for {} states", subset.len());
            self.states.insert(label.clone());
            if subset.iter().any(|q| self.finals.contains(q)) {
                self.finals.insert(label.clone());
            }

            for a in self.alphabet.iter().cloned().collect_vec() {
                let reached = self.step(&subset, &a);
                if reached.is_empty() {
                    continue;
                }
                if reached.len() > 1 {
                    queue.push(reached.iter().cloned().collect());
                }
                self.insert_edge(label.clone(), a, reached);
            }
            composites.insert(subset, label);
        }

        debug!("subset construction created {} composite states", composites.len());
        for targets in self.transitions.values_mut().flat_map(|row| row.values_mut()) {
            if targets.len() > 1 {
                let key: BTreeSet<State> = targets.iter().cloned().collect();
                let composite = composites
                    .get(&key)
                    .expect("every target set with multiple states has been registered")
                    .clone();
                *targets = Set::from_iter([composite]);
            }
        }

        self.remove_unreachable();
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        random::random_nfa,
        tests::{assert_same_language, ends_with_ab, even_as},
        Nfa, State,
    };

    #[test]
    #[traced_test]
    fn determinization_preserves_language() {
        let original = ends_with_ab();
        let mut dfa = original.clone();
        dfa.determinize();

        assert!(dfa.is_deterministic());
        assert_same_language(&dfa, &original, 8);
        assert!(dfa.contains_state("{q0,q1}"));
        assert!(dfa.final_states().iter().any(|q| q.as_str() == "{q0,q2}"));
    }

    #[test]
    fn deterministic_input_only_loses_unreachable_states() {
        let mut dfa = even_as();
        dfa.add_state("unused");
        dfa.determinize();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa, even_as());
    }

    #[test]
    fn composite_names_do_not_collide() {
        // concatenating member labels would map {a, b} onto the existing state "ab"
        let mut nfa: Nfa = Nfa::new("s");
        for q in ["a", "b", "ab", "{a,b}"] {
            nfa.add_state(q);
        }
        nfa.add_symbol('x');
        nfa.add_symbol('y');
        nfa.set_transition("s", 'x', ["a", "b"]).unwrap();
        nfa.set_transition("s", 'y', ["ab"]).unwrap();
        nfa.set_transition("a", 'x', ["a"]).unwrap();
        nfa.set_transition("b", 'y', ["b"]).unwrap();
        nfa.set_transition("ab", 'y', ["{a,b}"]).unwrap();
        nfa.set_transition("{a,b}", 'x', ["{a,b}"]).unwrap();
        nfa.set_final("b", true);
        nfa.set_final("{a,b}", true);
        let original = nfa.clone();

        nfa.determinize();
        assert!(nfa.is_deterministic());
        assert!(nfa.contains_state("{a,b}0"));
        assert!(nfa.contains_state("ab"));
        for (word, expected) in [("xy", true), ("y", false), ("yy", true), ("yyx", true), ("xx", false)] {
            assert_eq!(nfa.accepts_str(word), expected, "{word}");
            assert_eq!(original.accepts_str(word), expected, "{word}");
        }
        assert_eq!(nfa.successors("s", &'x'), vec![&State::from("{a,b}0")]);
    }

    #[test]
    fn random_automata_keep_their_language() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            let original = random_nfa(&mut rng, 5, &['a', 'b'], 0.3);
            let mut dfa = original.clone();
            dfa.determinize();
            assert!(dfa.is_deterministic());
            assert_same_language(&dfa, &original, 7);
        }
    }
}
