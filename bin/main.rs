use clap::Parser;
use relang::{Nfa, Productions};
use tracing::{info, Level};

mod cli;
mod io;

use cli::{Commands, Relang};

fn main() -> anyhow::Result<()> {
    let args = Relang::parse();

    let level = if args.verbose {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = match args.command {
        Commands::Show { input } => io::render(&io::read_automaton(input.as_ref())?, args.format)?,
        Commands::Accept { input, words } => {
            let nfa = io::read_automaton(Some(&input))?;
            words
                .iter()
                .map(|word| format!("{word}: {}", nfa.accepts_str(word)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Commands::Determinize { input } => {
            let mut nfa = io::read_automaton(input.as_ref())?;
            nfa.determinize();
            info!("Determinized automaton has {} states", nfa.size());
            io::render(&nfa, args.format)?
        }
        Commands::Minimize { input } => {
            let mut nfa = io::read_automaton(input.as_ref())?;
            nfa.determinize();
            nfa.minimize()?;
            info!("Minimal automaton has {} states", nfa.size());
            io::render(&nfa, args.format)?
        }
        Commands::Complement { input } => {
            let mut nfa = io::read_automaton(input.as_ref())?;
            nfa.complement();
            io::render(&nfa, args.format)?
        }
        Commands::Union { left, right } => {
            let mut nfa = io::read_automaton(Some(&left))?;
            nfa.union(io::read_automaton(Some(&right))?);
            io::render(&nfa, args.format)?
        }
        Commands::Intersection { left, right } => {
            let mut nfa = io::read_automaton(Some(&left))?;
            nfa.intersection(io::read_automaton(Some(&right))?);
            io::render(&nfa, args.format)?
        }
        Commands::Contains { left, right } => {
            let left = io::read_automaton(Some(&left))?;
            let right = io::read_automaton(Some(&right))?;
            left.contains(&right).to_string()
        }
        Commands::Equal { left, right } => {
            let left = io::read_automaton(Some(&left))?;
            let right = io::read_automaton(Some(&right))?;
            left.is_equal(&right).to_string()
        }
        Commands::Empty { input } => {
            let nfa = io::read_automaton(input.as_ref())?;
            if let Some(word) = nfa.find_accepted_word() {
                info!("Accepts {:?}", word.into_iter().collect::<String>());
            }
            nfa.is_empty().to_string()
        }
        Commands::Finite { input } => io::read_automaton(input.as_ref())?.is_finite().to_string(),
        Commands::Relabel {
            input,
            alphabetic,
            offset,
        } => {
            let mut nfa = io::read_automaton(input.as_ref())?;
            if alphabetic {
                nfa.relabel_alphabetic()?;
            } else {
                nfa.relabel_numeric(offset);
            }
            io::render(&nfa, args.format)?
        }
        Commands::Grammar { input } => {
            let text = io::from_file_or_stdin(input.as_ref())?;
            let grammar = Productions::try_from(text.as_str()).map_err(anyhow::Error::msg)?;
            io::render(&Nfa::from_regular_grammar(&grammar)?, args.format)?
        }
    };

    io::to_file_or_stdout(args.output.as_ref(), &output)
}
