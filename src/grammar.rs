use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::{AutomatonError, Nfa, Result, Set, State};

/// The production standing for the empty word.
pub const EPSILON: &str = "&";

/// A right-linear grammar in which non-terminals are single characters. Every production is
/// either [`EPSILON`], a single terminal, or a terminal followed by a non-terminal.
pub trait RegularGrammar {
    /// The start symbol of the grammar.
    fn initial_symbol(&self) -> char;

    /// Maps each non-terminal to the set of its productions.
    fn productions(&self) -> BTreeMap<char, BTreeSet<String>>;
}

/// Straightforward owned [`RegularGrammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Productions {
    initial: char,
    rules: BTreeMap<char, BTreeSet<String>>,
}

impl Productions {
    /// Creates a grammar with start symbol `initial` and no productions.
    pub fn new(initial: char) -> Self {
        Self {
            initial,
            rules: BTreeMap::new(),
        }
    }

    /// Adds the production `non_terminal -> production`.
    pub fn add<P: Into<String>>(&mut self, non_terminal: char, production: P) -> &mut Self {
        self.rules
            .entry(non_terminal)
            .or_default()
            .insert(production.into());
        self
    }
}

impl RegularGrammar for Productions {
    fn initial_symbol(&self) -> char {
        self.initial
    }

    fn productions(&self) -> BTreeMap<char, BTreeSet<String>> {
        self.rules.clone()
    }
}

/// Parses grammars written one non-terminal per line, as in
///
/// ```text
/// S -> aA | b | &
/// A -> aA | a
/// ```
///
/// The non-terminal of the first line is the start symbol.
impl TryFrom<&str> for Productions {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut grammar: Option<Productions> = None;
        for (number, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((head, body)) = line.split_once("->") else {
                return Err(format!("line {}: expected `->`", number + 1));
            };
            let mut head = head.trim().chars();
            let (Some(non_terminal), None) = (head.next(), head.next()) else {
                return Err(format!(
                    "line {}: left-hand side must be a single non-terminal",
                    number + 1
                ));
            };
            let grammar = grammar.get_or_insert_with(|| Productions::new(non_terminal));
            for production in body.split('|').map(str::trim) {
                grammar.add(non_terminal, production);
            }
        }
        grammar.ok_or_else(|| "grammar has no productions".to_string())
    }
}

impl Nfa<char> {
    /// Builds an automaton accepting the language generated by `grammar`.
    ///
    /// The states are the non-terminals together with one additional accepting state without
    /// outgoing transitions. A production `a` of `A` becomes a transition from `A` on `a` into the
    /// accepting state, a production `aB` a transition from `A` on `a` into `B`. If the start
    /// symbol produces the empty word, the initial state is accepting.
    pub fn from_regular_grammar<G: RegularGrammar>(grammar: &G) -> Result<Self> {
        let initial = grammar.initial_symbol();
        let productions = grammar.productions();
        let initial_productions = productions
            .get(&initial)
            .ok_or(AutomatonError::MissingProductions(initial))?;

        let non_terminals: Set<State> = productions
            .iter()
            .flat_map(|(head, bodies)| {
                std::iter::once(*head).chain(bodies.iter().filter_map(|b| b.chars().nth(1)))
            })
            .map(|c| State::new(c.to_string()))
            .collect();
        let accepting = if non_terminals.contains("X") {
            State::fresh("X", &non_terminals)
        } else {
            State::from("X")
        };

        let mut nfa = Nfa::new(initial.to_string());
        for q in &non_terminals {
            nfa.add_state(q);
        }
        nfa.add_state(&accepting);
        nfa.set_final(&accepting, true);
        if initial_productions.contains(EPSILON) {
            nfa.set_final(initial.to_string(), true);
        }

        for (head, bodies) in &productions {
            for body in bodies {
                if body == EPSILON {
                    continue;
                }
                let mut chars = body.chars();
                let (terminal, target) = match (chars.next(), chars.next(), chars.next()) {
                    (Some(t), None, _) => (t, accepting.clone()),
                    (Some(t), Some(n), None) => (t, State::new(n.to_string())),
                    _ => {
                        return Err(AutomatonError::MalformedProduction {
                            non_terminal: *head,
                            production: body.clone(),
                        })
                    }
                };
                nfa.add_symbol(terminal);
                nfa.add_transition(head.to_string(), terminal, target)?;
            }
        }
        debug!(
            "built automaton with {} states from grammar with {} non-terminals",
            nfa.size(),
            productions.len()
        );
        Ok(nfa)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_grammar() {
        let grammar = Productions::try_from("S -> aA | b | &\nA -> aA | a\n").unwrap();
        assert_eq!(grammar.initial_symbol(), 'S');
        let productions = grammar.productions();
        assert_eq!(productions.len(), 2);
        assert!(productions[&'S'].contains("&"));
        assert!(productions[&'A'].contains("aA"));

        assert!(Productions::try_from("S = a").is_err());
        assert!(Productions::try_from("SA -> a").is_err());
        assert!(Productions::try_from("").is_err());
    }

    #[test]
    fn automaton_from_grammar() {
        let grammar = Productions::try_from("S -> aA | b | &\nA -> aA | a").unwrap();
        let nfa = Nfa::from_regular_grammar(&grammar).unwrap();

        assert_eq!(nfa.initial().as_str(), "S");
        assert_eq!(nfa.size(), 3);
        assert!(!nfa.is_deterministic());
        for word in ["", "b", "aa", "aaaa"] {
            assert!(nfa.accepts_str(word), "{word}");
        }
        for word in ["a", "ab", "bb", "ba"] {
            assert!(!nfa.accepts_str(word), "{word}");
        }
    }

    #[test]
    fn accepting_state_avoids_non_terminals() {
        let mut grammar = Productions::new('S');
        grammar.add('S', "aX").add('X', "b");
        let nfa = Nfa::from_regular_grammar(&grammar).unwrap();
        assert!(nfa.contains_state("X0"));
        assert!(nfa.is_final("X0"));
        assert!(!nfa.is_final("X"));
        assert!(nfa.accepts_str("ab"));
        assert!(!nfa.accepts_str("a"));
    }

    #[test]
    fn referenced_non_terminal_without_productions() {
        let mut grammar = Productions::new('S');
        grammar.add('S', "a").add('S', "bB");
        let nfa = Nfa::from_regular_grammar(&grammar).unwrap();
        assert!(nfa.contains_state("B"));
        assert!(nfa.accepts_str("a"));
        assert!(!nfa.accepts_str("b"));
    }

    #[test]
    fn grammar_errors() {
        let grammar = Productions::new('S');
        assert!(matches!(
            Nfa::from_regular_grammar(&grammar),
            Err(AutomatonError::MissingProductions('S'))
        ));

        let mut grammar = Productions::new('S');
        grammar.add('S', "abc");
        assert!(matches!(
            Nfa::from_regular_grammar(&grammar),
            Err(AutomatonError::MalformedProduction { non_terminal: 'S', .. })
        ));
    }
}
