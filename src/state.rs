use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::Hash,
};

use serde::{Deserialize, Serialize};

use crate::Set;

/// Helper trait for the symbols an automaton reads. Anything that can be ordered, hashed and
/// printed qualifies, `char` being the most common choice.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Display {}

impl<S: Clone + Eq + Ord + Hash + Debug + Display> Symbol for S {}

/// The label of a state. Labels are opaque, the only thing that matters is equality and their
/// order, which is used to produce stable output.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Creates a new state with the given label.
    pub fn new<L: Into<String>>(label: L) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a label of the form `{prefix}{n}` that is not contained in `taken`, where `n` is
    /// the smallest number for which this holds.
    pub(crate) fn fresh(prefix: &str, taken: &Set<State>) -> Self {
        (0usize..)
            .map(|n| State(format!("{prefix}{n}")))
            .find(|candidate| !taken.contains(candidate))
            .expect("there are infinitely many candidates")
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for State {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for State {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&State> for State {
    fn from(value: &State) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_skips_taken_labels() {
        let taken: Set<State> = ["d0", "d1", "d3"].into_iter().map(State::from).collect();
        assert_eq!(State::fresh("d", &taken), State::from("d2"));
        assert_eq!(State::fresh("x", &taken), State::from("x0"));
    }

    #[test]
    fn ordering_follows_labels() {
        let mut states = vec![State::from("q2"), State::from("S"), State::from("q10")];
        states.sort();
        let labels: Vec<&str> = states.iter().map(State::as_str).collect();
        assert_eq!(labels, vec!["S", "q10", "q2"]);
    }
}
