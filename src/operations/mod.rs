//! The algorithms are implemented as inherent methods of [`Nfa`](crate::Nfa), grouped into one
//! module per concern:
//!
//! - pruning of unreachable and dead states,
//! - determinization through the subset construction,
//! - minimization by merging indistinguishable states,
//! - complement, union and intersection,
//! - emptiness, finiteness, containment and equivalence checks.

mod trimming;

mod subset;

mod minimization;

mod negation;

mod union;

mod intersection;

mod emptiness;

mod containment;
