//! Compile patterns into a binary automaton image.

use std::path::PathBuf;

use super::input::{AutomatonInput, CliError, load_automaton};

pub struct CompileArgs {
    pub automaton: AutomatonInput,
    pub output: PathBuf,
}

pub fn run(args: CompileArgs) -> Result<(), CliError> {
    let automaton = load_automaton(&args.automaton)?;
    std::fs::write(&args.output, automaton.to_bytes()).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })
}
