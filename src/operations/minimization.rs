use itertools::Itertools;
use tracing::{debug, trace};

use crate::{AutomatonError, Map, Nfa, Result, Set, State, Symbol};

type Pair = (State, State);

fn pair(p: &State, q: &State) -> Pair {
    if p <= q {
        (p.clone(), q.clone())
    } else {
        (q.clone(), p.clone())
    }
}

impl<S: Symbol> Nfa<S> {
    /// Transforms the automaton into the minimal automaton accepting the same language by
    /// removing unreachable and dead states and merging equivalent ones.
    ///
    /// Fails with [`AutomatonError::DeterminismRequired`] for non-deterministic automata, which
    /// have to be [determinized](Nfa::determinize) first.
    pub fn minimize(&mut self) -> Result<()> {
        if !self.is_deterministic() {
            return Err(AutomatonError::DeterminismRequired);
        }
        let before = self.size();
        self.remove_unreachable();
        self.remove_dead();
        self.merge_equivalent()?;
        debug!("minimized automaton from {before} to {} states", self.size());
        Ok(())
    }

    /// Merges states that can not be distinguished by any word.
    ///
    /// Starting from the assumption that two states are equivalent iff they agree on being
    /// accepting, pairs are discarded as long as some symbol leads them into a pair that is known
    /// to be distinguishable. All remaining pairs are then merged, where the initial state always
    /// survives a merge. A missing transition only agrees with another missing transition, so
    /// dead states should be removed beforehand to obtain a minimal result.
    pub fn merge_equivalent(&mut self) -> Result<()> {
        if !self.is_deterministic() {
            return Err(AutomatonError::DeterminismRequired);
        }

        let (accepting, rejecting): (Vec<&State>, Vec<&State>) = self
            .states
            .iter()
            .sorted()
            .partition(|q| self.finals.contains(*q));
        let mut equivalent: Set<Pair> = accepting
            .iter()
            .tuple_combinations()
            .chain(rejecting.iter().tuple_combinations())
            .map(|(p, q)| pair(p, q))
            .collect();

        let mut round = 0;
        loop {
            round += 1;
            let previous = equivalent.clone();
            equivalent.retain(|(p, q)| self.indistinguishable(p, q, &previous));
            trace!(
                "refinement round {round} kept {} of {} pairs",
                equivalent.len(),
                previous.len()
            );
            if equivalent.len() == previous.len() {
                break;
            }
        }

        let mut representative: Map<State, State> = Map::default();
        for (p, q) in &equivalent {
            for (from, to) in [(p, q), (q, p)] {
                let current = representative.entry(from.clone()).or_insert(from.clone());
                if *current != self.initial && (*to == self.initial || *to < *current) {
                    *current = to.clone();
                }
            }
        }
        representative.retain(|q, rep| q != rep);
        if representative.is_empty() {
            return Ok(());
        }
        debug!("merging {} equivalent states", representative.len());

        for targets in self.transitions.values_mut().flat_map(|row| row.values_mut()) {
            let redirected = targets
                .iter()
                .map(|t| representative.get(t).unwrap_or(t).clone())
                .collect();
            *targets = redirected;
        }
        for (q, rep) in &representative {
            trace!("merging {q} into {rep}");
            self.remove_state(q.as_str());
        }
        Ok(())
    }

    fn indistinguishable(&self, p: &State, q: &State, equivalent: &Set<Pair>) -> bool {
        self.alphabet.iter().all(|a| {
            match (self.target(p, a), self.target(q, a)) {
                (None, None) => true,
                (Some(p), Some(q)) => p == q || equivalent.contains(&pair(p, q)),
                _ => false,
            }
        })
    }
}
