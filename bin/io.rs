use std::io::Read;

use anyhow::Context;
use relang::Nfa;

use crate::cli::Format;

pub fn to_file_or_stdout(maybe_file_name: Option<&String>, output: &str) -> anyhow::Result<()> {
    if let Some(file_name) = maybe_file_name {
        tracing::debug!("Output file name specified: {:?}", file_name);
        std::fs::write(file_name, output)
            .with_context(|| format!("could not write to {file_name}"))?;
    } else {
        println!("{output}");
    }
    Ok(())
}

pub fn from_file_or_stdin(maybe_file_name: Option<&String>) -> anyhow::Result<String> {
    match maybe_file_name.filter(|f| f.as_str() != "-") {
        Some(f) => std::fs::read_to_string(f).with_context(|| format!("unable to read {f}")),
        None => {
            tracing::debug!("No input files specified, using stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("error when reading from stdin")?;
            Ok(buf)
        }
    }
}

pub fn read_automaton(maybe_file_name: Option<&String>) -> anyhow::Result<Nfa> {
    let json = from_file_or_stdin(maybe_file_name)?;
    let nfa = Nfa::from_json(&json).with_context(|| {
        format!(
            "could not parse automaton from {}",
            maybe_file_name.map(String::as_str).unwrap_or("stdin")
        )
    })?;
    tracing::debug!("Parsed automaton with {} states", nfa.size());
    Ok(nfa)
}

pub fn render(nfa: &Nfa, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Json => nfa.to_json()?,
        Format::Table => nfa.to_string(),
        Format::Dot => nfa.to_dot(),
    })
}
