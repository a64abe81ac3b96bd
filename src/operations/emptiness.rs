use std::collections::{BTreeSet, VecDeque};

use itertools::Itertools;
use tracing::trace;

use crate::{Nfa, Set, State, Symbol};

impl<S: Symbol> Nfa<S> {
    /// Returns `true` if no word is accepted, that is if no accepting state is reachable.
    pub fn is_empty(&self) -> bool {
        self.reachable_states()
            .iter()
            .all(|q| !self.finals.contains(q))
    }

    /// Returns `true` if only finitely many words are accepted. This is the case iff no cycle
    /// that is reachable from the initial state can still lead to acceptance. Works on a copy
    /// from which all dead states are removed.
    pub fn is_finite(&self) -> bool {
        let mut alive = self.clone();
        alive.remove_dead();
        if !alive.productive_states().contains(&alive.initial) {
            // the initial state is dead but never pruned, its loops do not matter
            return true;
        }
        !alive.has_cycle_from(&alive.initial)
    }

    /// Iterative depth-first search which reports whether a state on the current path is
    /// entered again.
    fn has_cycle_from(&self, origin: &State) -> bool {
        let symbols = self.alphabet.iter().sorted().collect_vec();
        let successors = |q: &State| -> Vec<State> {
            symbols
                .iter()
                .flat_map(|a| self.targets(q, a).into_iter().flatten())
                .cloned()
                .unique()
                .collect()
        };

        let mut on_path: Set<State> = Set::default();
        let mut finished: Set<State> = Set::default();
        let mut stack = vec![(origin.clone(), successors(origin))];
        on_path.insert(origin.clone());

        while let Some((q, pending)) = stack.last_mut() {
            match pending.pop() {
                Some(p) if on_path.contains(&p) => {
                    trace!("found cycle through {p}");
                    return true;
                }
                Some(p) if finished.contains(&p) => {}
                Some(p) => {
                    on_path.insert(p.clone());
                    let next = successors(&p);
                    stack.push((p, next));
                }
                None => {
                    on_path.remove(&*q);
                    finished.insert(q.clone());
                    stack.pop();
                }
            }
        }
        false
    }

    /// Returns a shortest accepted word, ties are broken by preferring smaller symbols. Returns
    /// `None` if the language is empty.
    pub fn find_accepted_word(&self) -> Option<Vec<S>> {
        let symbols = self.alphabet.iter().sorted().collect_vec();
        let origin: BTreeSet<State> = BTreeSet::from([self.initial.clone()]);
        let mut seen: Set<BTreeSet<State>> = Set::from_iter([origin.clone()]);
        let mut queue = VecDeque::from([(origin, Vec::new())]);

        while let Some((current, word)) = queue.pop_front() {
            if current.iter().any(|q| self.finals.contains(q)) {
                return Some(word);
            }
            for &a in &symbols {
                let next: BTreeSet<State> = self.step(&current, a).into_iter().collect();
                if !next.is_empty() && seen.insert(next.clone()) {
                    let mut extended = word.clone();
                    extended.push(a.clone());
                    queue.push_back((next, extended));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        tests::{a_or_ab, ends_with_ab, even_as},
        Nfa,
    };

    #[test]
    fn emptiness() {
        let mut nfa: Nfa = Nfa::new("q0");
        nfa.add_state("q1");
        nfa.add_symbol('a');
        assert!(nfa.is_empty());

        // accepting, but unreachable
        nfa.set_final("q1", true);
        assert!(nfa.is_empty());
        assert_eq!(nfa.size(), 2);

        nfa.set_transition("q0", 'a', ["q1"]).unwrap();
        assert!(!nfa.is_empty());
        assert!(!ends_with_ab().is_empty());
    }

    #[test]
    fn finiteness() {
        let mut looping: Nfa = Nfa::new("q0");
        looping.add_symbol('a');
        looping.set_transition("q0", 'a', ["q0"]).unwrap();
        looping.set_final("q0", true);
        assert!(!looping.is_finite());

        assert!(a_or_ab().is_finite());
        assert!(!ends_with_ab().is_finite());
        assert!(!even_as().is_finite());
    }

    #[test]
    fn loops_on_dead_states_are_finite() {
        let mut nfa = a_or_ab();
        nfa.add_state("trap");
        nfa.set_transition("1", 'a', ["trap"]).unwrap();
        nfa.set_transition("trap", 'a', ["trap"]).unwrap();
        assert!(nfa.is_finite());

        // the initial state is never pruned, but a loop on it is irrelevant if it is dead
        let mut empty: Nfa = Nfa::new("q0");
        empty.add_symbol('a');
        empty.set_transition("q0", 'a', ["q0"]).unwrap();
        assert!(empty.is_finite());
        assert_eq!(empty.size(), 1);
    }

    #[test]
    fn shortest_witness() {
        assert_eq!(ends_with_ab().find_accepted_word(), Some(vec!['a', 'b']));
        assert_eq!(even_as().find_accepted_word(), Some(vec![]));
        assert_eq!(a_or_ab().find_accepted_word(), Some(vec!['a']));
        assert_eq!(Nfa::<char>::new("q").find_accepted_word(), None);
    }
}
