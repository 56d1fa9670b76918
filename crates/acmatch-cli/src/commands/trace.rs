//! Trace the matcher for debugging.

use acmatch::{Colors, Match, PrintTracer, Verbosity};

use super::find::word_line;
use super::input::{AutomatonInput, CliError, TextInput, load_automaton, load_text};

pub struct TraceArgs {
    pub automaton: AutomatonInput,
    pub text: TextInput,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) -> Result<(), CliError> {
    let automaton = load_automaton(&args.automaton)?;
    let text = load_text(&args.text, &args.automaton)?;
    let colors = Colors::new(args.color);

    let mut tracer = PrintTracer::new(&text, &automaton, args.verbosity, colors);
    let matches: Vec<Match> = acmatch::find(&automaton, &text)?
        .with_tracer(&mut tracer)
        .collect();
    tracer.print();

    if args.no_result {
        return Ok(());
    }

    println!("{}---{}", colors.dim, colors.reset);
    for found in &matches {
        println!("{}", word_line(&automaton, found, colors));
    }
    Ok(())
}
