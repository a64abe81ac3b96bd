//! Finite automata over arbitrary symbols, supporting the algebra of regular languages.
//!
//! The central type is [`Nfa`], a possibly non-deterministic finite automaton which becomes
//! deterministic once every transition leads to exactly one state. All algorithms mutate the
//! automaton in place, so an [`Nfa`] is usually built up, transformed a couple of times and then
//! queried. Operations combining two automata take ownership of their operand.
//!
//! ```
//! use relang::Nfa;
//!
//! let mut nfa = Nfa::new("q0");
//! nfa.add_state("q1");
//! nfa.add_symbol('a');
//! nfa.set_transition("q0", 'a', ["q0", "q1"]).unwrap();
//! nfa.set_final("q1", true);
//!
//! assert!(nfa.accepts_str("aaa"));
//! nfa.determinize();
//! assert!(nfa.is_deterministic());
//! ```
#![warn(missing_docs)]

mod error;
pub use error::{AutomatonError, Result};

mod state;
pub use state::{State, Symbol};

mod nfa;
pub use nfa::Nfa;

/// Contains the algorithms that transform or decide properties of an [`Nfa`].
pub mod operations;

mod relabel;

/// Construction of automata from right-linear grammars.
pub mod grammar;
pub use grammar::{Productions, RegularGrammar};

mod record;
pub use record::{Record, TransitionRecord};

mod display;

/// Pseudo-random generation of automata.
pub mod random;

/// Set type used throughout the crate.
#[cfg(feature = "ahash")]
pub type Set<S> = std::collections::HashSet<S, ahash::RandomState>;
/// Map type used throughout the crate.
#[cfg(feature = "ahash")]
pub type Map<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

/// Set type used throughout the crate.
#[cfg(not(feature = "ahash"))]
pub type Set<S> = std::collections::HashSet<S>;
/// Map type used throughout the crate.
#[cfg(not(feature = "ahash"))]
pub type Map<K, V> = std::collections::HashMap<K, V>;
