use acmatch::{Colors, dump};

use super::input::{AutomatonInput, CliError, load_automaton};

pub struct DumpArgs {
    pub automaton: AutomatonInput,
    pub color: bool,
}

pub fn run(args: DumpArgs) -> Result<(), CliError> {
    let automaton = load_automaton(&args.automaton)?;
    let colors = Colors::new(args.color);
    print!("{}", dump(&automaton, colors));
    Ok(())
}
