use std::collections::VecDeque;

use tracing::debug;

use crate::{Nfa, Set, State, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Computes the set of states that can be reached from the initial state.
    pub fn reachable_states(&self) -> Set<State> {
        let mut seen = Set::from_iter([self.initial.clone()]);
        let mut queue = VecDeque::from([self.initial.clone()]);
        while let Some(q) = queue.pop_front() {
            for a in &self.alphabet {
                for p in self.targets(&q, a).into_iter().flatten() {
                    if seen.insert(p.clone()) {
                        queue.push_back(p.clone());
                    }
                }
            }
        }
        seen
    }

    /// Computes the set of states from which some accepting state can be reached.
    pub fn productive_states(&self) -> Set<State> {
        let mut alive = self.finals.clone();
        loop {
            let newly_alive = self
                .edges()
                .filter(|(q, a, targets)| {
                    !alive.contains(*q)
                        && self.alphabet.contains(*a)
                        && targets.iter().any(|p| alive.contains(p))
                })
                .map(|(q, _, _)| q.clone())
                .collect::<Set<_>>();
            if newly_alive.is_empty() {
                return alive;
            }
            alive.extend(newly_alive);
        }
    }

    /// Removes all states that can not be reached from the initial state.
    pub fn remove_unreachable(&mut self) {
        let reachable = self.reachable_states();
        self.retain_states(&reachable);
    }

    /// Removes all states from which no accepting state can be reached. The initial state is kept
    /// even if it is dead.
    pub fn remove_dead(&mut self) {
        let alive = self.productive_states();
        self.retain_states(&alive);
    }

    fn retain_states(&mut self, keep: &Set<State>) {
        let doomed: Vec<State> = self
            .states
            .iter()
            .filter(|q| !keep.contains(*q))
            .cloned()
            .collect();
        if doomed.is_empty() {
            return;
        }
        debug!("removing {} of {} states", doomed.len(), self.size());
        for q in doomed {
            self.remove_state(q.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tests::{assert_same_language, ends_with_ab, wiki_dfa},
        Nfa,
    };

    #[test]
    fn unreachable_states_are_removed() {
        let mut nfa = ends_with_ab();
        nfa.add_state("lonely");
        nfa.add_state("island");
        nfa.set_transition("lonely", 'a', ["q2", "island"]).unwrap();
        let original = nfa.clone();

        nfa.remove_unreachable();
        assert_eq!(nfa.size(), 3);
        assert!(!nfa.contains_state("lonely"));
        assert!(!nfa.contains_state("island"));
        assert_same_language(&nfa, &original, 6);
    }

    #[test]
    fn dead_states_are_removed() {
        let mut nfa = wiki_dfa();
        nfa.remove_dead();
        assert!(!nfa.contains_state("f"));
        assert_eq!(nfa.size(), 5);
        assert!(!nfa.is_complete());
    }

    #[test]
    fn dead_initial_state_survives() {
        let mut nfa: Nfa = Nfa::new("q0");
        nfa.add_state("q1");
        nfa.add_symbol('a');
        nfa.set_transition("q0", 'a', ["q1"]).unwrap();
        nfa.remove_dead();
        assert_eq!(nfa.size(), 1);
        assert!(nfa.contains_state("q0"));
        assert!(nfa.transitions().is_empty());
    }
}
