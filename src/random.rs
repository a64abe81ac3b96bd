use crate::{Nfa, State};

fn label(i: usize) -> State {
    State::new(format!("q{i}"))
}

/// Generates an automaton with states `q0` to `q{states - 1}` over the given symbols, where `q0`
/// is initial. For every state, symbol and potential target, the corresponding edge is inserted
/// with probability `density`. Each state is accepting with probability one half.
///
/// Passing a seeded [`fastrand::Rng`] makes the result reproducible.
pub fn random_nfa(rng: &mut fastrand::Rng, states: usize, symbols: &[char], density: f64) -> Nfa {
    let mut nfa = Nfa::new(label(0));
    for i in 1..states {
        nfa.add_state(label(i));
    }
    for &sym in symbols {
        nfa.add_symbol(sym);
    }

    for source in 0..states.max(1) {
        for &sym in symbols {
            let targets: Vec<State> = (0..states.max(1))
                .filter(|_| rng.f64() < density)
                .map(label)
                .collect();
            nfa.set_transition(label(source), sym, targets)
                .expect("all states and symbols were added before");
        }
        if rng.bool() {
            nfa.set_final(label(source), true);
        }
    }
    nfa
}

/// Works like [`random_nfa`], but produces a complete deterministic automaton in which every
/// transition leads to a uniformly chosen state.
pub fn random_dfa(rng: &mut fastrand::Rng, states: usize, symbols: &[char]) -> Nfa {
    let states = states.max(1);
    let mut dfa = Nfa::new(label(0));
    for i in 1..states {
        dfa.add_state(label(i));
    }
    for &sym in symbols {
        dfa.add_symbol(sym);
    }
    for source in 0..states {
        for &sym in symbols {
            dfa.set_transition(label(source), sym, [label(rng.usize(0..states))])
                .expect("all states and symbols were added before");
        }
        if rng.bool() {
            dfa.set_final(label(source), true);
        }
    }
    dfa
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_reproducible() {
        let left = random_nfa(&mut fastrand::Rng::with_seed(3), 4, &['a', 'b'], 0.4);
        let right = random_nfa(&mut fastrand::Rng::with_seed(3), 4, &['a', 'b'], 0.4);
        assert_eq!(left, right);
        assert_eq!(left.size(), 4);
    }

    #[test]
    fn random_dfa_is_complete_and_deterministic() {
        let dfa = random_dfa(&mut fastrand::Rng::with_seed(11), 5, &['a', 'b', 'c']);
        assert!(dfa.is_deterministic());
        assert!(dfa.is_complete());
        assert_eq!(dfa.alphabet().len(), 3);
    }
}
