//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for match/trace (`-p`/`-a` shift the first positional to text)

use std::path::PathBuf;

use acmatch::Verbosity;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::find::MatchArgs;
use crate::commands::input::{AutomatonInput, TextInput};
use crate::commands::trace::TraceArgs;

pub struct MatchParams {
    pub patterns_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub automaton_path: Option<PathBuf>,
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
    // Note: verbose, no_result are parsed but not extracted (unified flags)
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let patterns = get_patterns(m);
        let automaton_path = m.get_one::<PathBuf>("automaton_path").cloned();
        let (patterns_path, text_path) = shift_positional_to_text(
            !patterns.is_empty() || automaton_path.is_some(),
            m.get_one::<PathBuf>("patterns_path").cloned(),
            m.get_one::<PathBuf>("text_path").cloned(),
        );

        Self {
            // Input (with positional shifting applied)
            patterns_path,
            patterns,
            automaton_path,
            text_path,
            text: m.get_one::<String>("text").cloned(),

            // Output options
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            automaton: AutomatonInput {
                patterns_path: p.patterns_path,
                patterns: p.patterns,
                automaton_path: p.automaton_path,
            },
            text: TextInput {
                text_path: p.text_path,
                text: p.text,
            },
            json: p.json,
            pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompileParams {
    pub patterns_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub output: PathBuf,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_path: m.get_one::<PathBuf>("patterns_path").cloned(),
            patterns: get_patterns(m),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            automaton: AutomatonInput {
                patterns_path: p.patterns_path,
                patterns: p.patterns,
                automaton_path: None,
            },
            output: p.output,
        }
    }
}

pub struct DumpParams {
    pub patterns_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub automaton_path: Option<PathBuf>,
    pub color: ColorChoice,
    // Note: text_path, text, json, compact, verbose, no_result are parsed but
    // not extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_path: m.get_one::<PathBuf>("patterns_path").cloned(),
            patterns: get_patterns(m),
            automaton_path: m.get_one::<PathBuf>("automaton_path").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            automaton: AutomatonInput {
                patterns_path: p.patterns_path,
                patterns: p.patterns,
                automaton_path: p.automaton_path,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub patterns_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub automaton_path: Option<PathBuf>,
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
    pub verbose: u8,
    pub no_result: bool,
    pub color: ColorChoice,
    // Note: json, compact are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let patterns = get_patterns(m);
        let automaton_path = m.get_one::<PathBuf>("automaton_path").cloned();
        let (patterns_path, text_path) = shift_positional_to_text(
            !patterns.is_empty() || automaton_path.is_some(),
            m.get_one::<PathBuf>("patterns_path").cloned(),
            m.get_one::<PathBuf>("text_path").cloned(),
        );

        Self {
            // Input (with positional shifting applied)
            patterns_path,
            patterns,
            automaton_path,
            text_path,
            text: m.get_one::<String>("text").cloned(),

            // Trace options
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            automaton: AutomatonInput {
                patterns_path: p.patterns_path,
                patterns: p.patterns,
                automaton_path: p.automaton_path,
            },
            text: TextInput {
                text_path: p.text_path,
                text: p.text,
            },
            verbosity,
            no_result: p.no_result,
            color: p.color.should_colorize(),
        }
    }
}

/// Collect repeated -p/--pattern values in order.
fn get_patterns(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("patterns")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// When patterns come from -p or -a, a single positional is the text.
/// This enables: `acmatch match -p he text.txt`
fn shift_positional_to_text(
    has_inline_automaton: bool,
    patterns_path: Option<PathBuf>,
    text_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_inline_automaton && patterns_path.is_some() && text_path.is_none() {
        (None, patterns_path)
    } else {
        (patterns_path, text_path)
    }
}
