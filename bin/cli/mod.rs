use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Relang {
    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub verbose: bool,
    /// Turn on debugging information
    #[arg(short, long, global = true)]
    pub debug: bool,
    /// File to write the result to, stdout if absent
    #[arg(short, long, global = true)]
    pub output: Option<String>,
    /// How resulting automata are printed
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Table,
    Dot,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Prints the automaton in the selected format")]
    Show { input: Option<String> },
    #[command(about = "Checks which of the given words are accepted")]
    Accept { input: String, words: Vec<String> },
    #[command(about = "Determinizes the automaton through the subset construction")]
    Determinize { input: Option<String> },
    #[command(about = "Determinizes and minimizes the automaton")]
    Minimize { input: Option<String> },
    #[command(about = "Computes the complement of the automaton")]
    Complement { input: Option<String> },
    #[command(about = "Computes an automaton for the union of both languages")]
    Union { left: String, right: String },
    #[command(about = "Computes an automaton for the intersection of both languages")]
    Intersection { left: String, right: String },
    #[command(about = "Checks whether the language of LEFT contains the language of RIGHT")]
    Contains { left: String, right: String },
    #[command(about = "Checks whether both automata accept the same language")]
    Equal { left: String, right: String },
    #[command(about = "Checks whether the accepted language is empty")]
    Empty { input: Option<String> },
    #[command(about = "Checks whether the accepted language is finite")]
    Finite { input: Option<String> },
    #[command(about = "Renames the states to q0, q1, ... or S, A, B, ...")]
    Relabel {
        input: Option<String>,
        #[arg(long, conflicts_with = "offset")]
        alphabetic: bool,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    #[command(about = "Builds an automaton from a right-linear grammar such as `S -> aS | b`")]
    Grammar { input: Option<String> },
}
