use std::fmt::Display;

use itertools::Itertools;

use crate::{Nfa, State, Symbol};

impl<S: Symbol> Nfa<S> {
    fn decorate(&self, q: &State) -> String {
        let arrow = if *q == self.initial { "->" } else { "" };
        let star = if self.finals.contains(q) { "*" } else { "" };
        format!("{arrow}{star}{q}")
    }

    /// Builds a table with one row per state and one column per symbol. The initial state is
    /// marked with `->`, accepting states with `*`.
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet().iter().map(|a| a.to_string())),
        );
        for q in self.states() {
            let mut row = vec![self.decorate(q)];
            for a in self.alphabet() {
                let targets = self.successors(q.as_str(), a);
                row.push(match targets.as_slice() {
                    [] => "-".to_string(),
                    [single] => single.to_string(),
                    many => format!("{{{}}}", many.iter().join(", ")),
                });
            }
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }

    /// Produces a Graphviz representation of the automaton.
    pub fn to_dot(&self) -> String {
        let header = [
            "fontname=\"Helvetica,Arial,sans-serif\"\nrankdir=LR".to_string(),
            "init [label=\"\", shape=none]".into(),
            "node [shape=circle]".into(),
        ]
        .join("\n");

        let mut lines = vec![format!("init -> \"{}\"", self.initial)];
        for q in self.final_states() {
            lines.push(format!("\"{q}\" [shape=doublecircle]"));
        }
        for (q, a, targets) in self.transitions() {
            for p in targets {
                lines.push(format!("\"{q}\" -> \"{p}\" [label = \"{a}\"]"));
            }
        }
        format!("digraph A {{\n{}\n{}\n}}\n", header, lines.join("\n"))
    }
}

impl<S: Symbol> Display for Nfa<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build_transition_table())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{a_or_ab, ends_with_ab};

    #[test]
    fn transition_table() {
        let table = ends_with_ab().to_string();
        assert!(table.contains("->q0"));
        assert!(table.contains("*q2"));
        assert!(table.contains("{q0, q1}"));
        assert!(table.lines().any(|line| line.contains("q1") && line.contains('-')));
    }

    #[test]
    fn dot_output() {
        let dot = a_or_ab().to_dot();
        assert!(dot.starts_with("digraph A {"));
        assert!(dot.contains("init -> \"0\""));
        assert!(dot.contains("\"1\" [shape=doublecircle]"));
        assert!(dot.contains("\"0\" -> \"1\" [label = \"a\"]"));
    }
}
