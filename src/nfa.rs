use std::borrow::Borrow;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{AutomatonError, Map, Result, Set, State, Symbol};

/// A finite automaton whose transition relation maps pairs of state and symbol to a non-empty set
/// of target states. If every such set is a singleton, the automaton is deterministic and all
/// operations treat it as a DFA.
///
/// A pair without an entry in the transition relation has no successor, so reading the
/// corresponding symbol in that state rejects. This is different from a transition into an
/// explicit sink, which is what [`Nfa::complete`] introduces.
///
/// The alphabet is managed explicitly, it is not inferred from the transitions. Cloning an
/// automaton yields a fully independent copy.
///
/// Methods that may store a state label take anything that converts [`Into<State>`], methods
/// that only look states up or remove them take a `&str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa<S: Symbol = char> {
    pub(crate) states: Set<State>,
    pub(crate) alphabet: Set<S>,
    /// Rows of the transition table. Neither rows nor target sets are ever empty.
    pub(crate) transitions: Map<State, Map<S, Set<State>>>,
    pub(crate) initial: State,
    pub(crate) finals: Set<State>,
}

impl<S: Symbol> Nfa<S> {
    /// Creates an automaton over the empty alphabet that consists only of the non-accepting state
    /// `initial`.
    pub fn new<Q: Into<State>>(initial: Q) -> Self {
        let initial = initial.into();
        Self {
            states: Set::from_iter([initial.clone()]),
            alphabet: Set::default(),
            transitions: Map::default(),
            initial,
            finals: Set::default(),
        }
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &State {
        &self.initial
    }

    /// Returns the states of the automaton, the initial state comes first and is followed by all
    /// other states in ascending order.
    pub fn states(&self) -> Vec<&State> {
        std::iter::once(&self.initial)
            .chain(self.states.iter().filter(|q| **q != self.initial).sorted())
            .collect()
    }

    /// Returns the symbols of the alphabet in ascending order.
    pub fn alphabet(&self) -> Vec<&S> {
        self.alphabet.iter().sorted().collect()
    }

    /// Returns the accepting states in ascending order.
    pub fn final_states(&self) -> Vec<&State> {
        self.finals.iter().sorted().collect()
    }

    /// Lists all transitions as `(source, symbol, targets)`, sorted by source and symbol.
    pub fn transitions(&self) -> Vec<(&State, &S, Vec<&State>)> {
        self.edges()
            .sorted_by(|(p, a, _), (q, b, _)| (p, a).cmp(&(q, b)))
            .map(|(q, a, targets)| (q, a, targets.iter().sorted().collect()))
            .collect()
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (&State, &S, &Set<State>)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(q, row)| row.iter().map(move |(a, targets)| (q, a, targets)))
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if `state` is a state of the automaton.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Returns `true` if `state` is accepting.
    pub fn is_final(&self, state: &str) -> bool {
        self.finals.contains(state)
    }

    /// Returns the targets of the transition from `state` on `symbol` in ascending order. The
    /// result is empty if no such transition exists.
    pub fn successors(&self, state: &str, symbol: &S) -> Vec<&State> {
        self.targets(state, symbol)
            .map(|targets| targets.iter().sorted().collect())
            .unwrap_or_default()
    }

    pub(crate) fn targets<Q>(&self, state: &Q, symbol: &S) -> Option<&Set<State>>
    where
        Q: Borrow<str> + ?Sized,
    {
        self.transitions
            .get(Borrow::<str>::borrow(state))
            .and_then(|row| row.get(symbol))
    }

    /// Stores `targets`, which must not be empty, as the targets of `state` on `symbol`.
    pub(crate) fn insert_edge(&mut self, state: State, symbol: S, targets: Set<State>) {
        self.transitions
            .entry(state)
            .or_default()
            .insert(symbol, targets);
    }

    /// Returns the unique target of a transition. Should only be used on deterministic automata,
    /// for others an arbitrary target is returned.
    pub(crate) fn target<Q>(&self, state: &Q, symbol: &S) -> Option<&State>
    where
        Q: Borrow<str> + ?Sized,
    {
        self.targets(state, symbol)
            .and_then(|targets| targets.iter().next())
    }

    /// Collects the targets of all transitions on `symbol` that leave one of the given states.
    pub(crate) fn step<'a, I>(&self, states: I, symbol: &S) -> Set<State>
    where
        I: IntoIterator<Item = &'a State>,
    {
        let mut out = Set::default();
        for q in states {
            if let Some(targets) = self.targets(q, symbol) {
                out.extend(targets.iter().cloned());
            }
        }
        out
    }

    /// Adds a state, returns `false` if it was already present.
    pub fn add_state<Q: Into<State>>(&mut self, state: Q) -> bool {
        self.states.insert(state.into())
    }

    /// Removes `state` together with all transitions leaving or entering it. Transitions that
    /// are left without a target are dropped. The initial state can not be removed, calling this
    /// method on it does nothing.
    pub fn remove_state(&mut self, state: &str) {
        if self.initial.as_str() == state {
            trace!("refusing to remove initial state {state}");
            return;
        }
        if !self.states.remove(state) {
            return;
        }
        self.finals.remove(state);
        self.transitions.remove(state);
        self.transitions.retain(|_, row| {
            row.retain(|_, targets| {
                targets.remove(state);
                !targets.is_empty()
            });
            !row.is_empty()
        });
    }

    /// Adds a symbol to the alphabet, returns `false` if it was already present.
    pub fn add_symbol(&mut self, symbol: S) -> bool {
        self.alphabet.insert(symbol)
    }

    /// Removes a symbol from the alphabet along with all transitions on it.
    pub fn remove_symbol(&mut self, symbol: &S) {
        self.alphabet.remove(symbol);
        self.transitions.retain(|_, row| {
            row.remove(symbol);
            !row.is_empty()
        });
    }

    /// Sets the targets of the transition from `state` on `symbol`, replacing whatever was there
    /// before. An empty set of targets removes the transition.
    ///
    /// Fails with [`AutomatonError::InvalidStateReference`] if the source or any target is not a
    /// state of the automaton and with [`AutomatonError::UnknownSymbol`] if `symbol` is not in the
    /// alphabet. In both cases the automaton is left unchanged.
    pub fn set_transition<Q, P, I>(&mut self, state: Q, symbol: S, targets: I) -> Result<()>
    where
        Q: Into<State>,
        P: Into<State>,
        I: IntoIterator<Item = P>,
    {
        let state = state.into();
        let targets: Set<State> = targets.into_iter().map(Into::into).collect();

        if targets.is_empty() {
            if let Some(row) = self.transitions.get_mut(&state) {
                row.remove(&symbol);
                if row.is_empty() {
                    self.transitions.remove(&state);
                }
            }
            return Ok(());
        }

        let missing = std::iter::once(&state)
            .chain(targets.iter())
            .filter(|q| !self.states.contains(*q))
            .cloned()
            .collect_vec();
        if !missing.is_empty() {
            return Err(AutomatonError::missing(missing));
        }
        if !self.alphabet.contains(&symbol) {
            return Err(AutomatonError::UnknownSymbol(symbol.to_string()));
        }

        self.insert_edge(state, symbol, targets);
        Ok(())
    }

    /// Adds `target` to the targets of the transition from `state` on `symbol`. Fails under the
    /// same conditions as [`Nfa::set_transition`].
    pub fn add_transition<Q, P>(&mut self, state: Q, symbol: S, target: P) -> Result<()>
    where
        Q: Into<State>,
        P: Into<State>,
    {
        let state = state.into();
        let mut targets = self.targets(&state, &symbol).cloned().unwrap_or_default();
        targets.insert(target.into());
        self.set_transition(state, symbol, targets)
    }

    /// Marks `state` as accepting or rejecting. Returns `false` and does nothing if the state does
    /// not exist.
    pub fn set_final<Q: Into<State>>(&mut self, state: Q, accepting: bool) -> bool {
        let state = state.into();
        if !self.states.contains(&state) {
            return false;
        }
        if accepting {
            self.finals.insert(state);
        } else {
            self.finals.remove(&state);
        }
        true
    }

    /// Flips whether `state` is accepting. Returns `false` and does nothing if the state does not
    /// exist.
    pub fn toggle_final<Q: Into<State>>(&mut self, state: Q) -> bool {
        let state = state.into();
        if !self.states.contains(&state) {
            return false;
        }
        if !self.finals.remove(&state) {
            self.finals.insert(state);
        }
        true
    }

    /// Makes `state` the initial state.
    pub fn set_initial<Q: Into<State>>(&mut self, state: Q) -> Result<()> {
        let state = state.into();
        if !self.states.contains(&state) {
            return Err(AutomatonError::missing([state]));
        }
        self.initial = state;
        Ok(())
    }

    /// Decides whether the given word is accepted. All runs are simulated simultaneously by
    /// keeping track of the set of states that are active after each prefix.
    pub fn accepts<W: IntoIterator<Item = S>>(&self, word: W) -> bool {
        let mut current: Set<State> = Set::from_iter([self.initial.clone()]);
        for symbol in word {
            current = self.step(&current, &symbol);
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|q| self.finals.contains(q))
    }

    /// Returns `true` if every transition has exactly one target.
    pub fn is_deterministic(&self) -> bool {
        self.edges().all(|(_, _, targets)| targets.len() == 1)
    }

    /// Returns `true` if there is a transition for every state and symbol.
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|q| {
            self.alphabet
                .iter()
                .all(|a| self.targets(q, a).is_some())
        })
    }

    /// Makes the transition relation total. Every missing transition is redirected to a freshly
    /// created rejecting sink state, whose label is returned. If the automaton is already
    /// complete, nothing happens and `None` is returned.
    pub fn complete(&mut self) -> Option<State> {
        if self.is_complete() {
            return None;
        }
        let sink = State::fresh("qdead", &self.states);
        self.states.insert(sink.clone());

        let mut added = 0;
        for q in &self.states {
            let row = self.transitions.entry(q.clone()).or_default();
            for a in &self.alphabet {
                row.entry(a.clone()).or_insert_with(|| {
                    added += 1;
                    Set::from_iter([sink.clone()])
                });
            }
        }
        debug!("completed automaton with sink {sink}, adding {added} transitions");
        Some(sink)
    }
}

impl Nfa<char> {
    /// Decides whether the characters of `word` form an accepted word.
    pub fn accepts_str(&self, word: &str) -> bool {
        self.accepts(word.chars())
    }
}
