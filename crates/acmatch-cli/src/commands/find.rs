//! Report every pattern occurrence in a text.

use acmatch::{Automaton, Colors, Match};
use serde::Serialize;

use super::input::{AutomatonInput, CliError, TextInput, load_automaton, load_text};

pub struct MatchArgs {
    pub automaton: AutomatonInput,
    pub text: TextInput,
    pub json: bool,
    pub pretty: bool,
    pub color: bool,
}

/// One JSON array element: the matched word plus the event itself.
#[derive(Serialize)]
struct MatchRecord<'a> {
    word: &'a str,
    #[serde(flatten)]
    found: &'a Match,
}

pub fn run(args: MatchArgs) -> Result<(), CliError> {
    let automaton = load_automaton(&args.automaton)?;
    let text = load_text(&args.text, &args.automaton)?;
    let matches = acmatch::find(&automaton, &text)?;

    if args.json {
        let found: Vec<Match> = matches.collect();
        println!("{}", render_json(&automaton, &found, args.pretty)?);
        return Ok(());
    }

    let colors = Colors::new(args.color);
    for found in matches {
        println!("{}", word_line(&automaton, &found, colors));
    }
    Ok(())
}

/// `Word <pattern> appears from <start> to <end>`
pub fn word_line(automaton: &Automaton, found: &Match, colors: Colors) -> String {
    format!(
        "Word {} appears from {} to {}",
        colors.pattern(automaton.pattern(found.pattern)),
        found.start,
        found.end
    )
}

pub fn render_json(
    automaton: &Automaton,
    matches: &[Match],
    pretty: bool,
) -> Result<String, CliError> {
    let records: Vec<MatchRecord<'_>> = matches
        .iter()
        .map(|found| MatchRecord {
            word: automaton.pattern(found.pattern),
            found,
        })
        .collect();
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(json)
}
