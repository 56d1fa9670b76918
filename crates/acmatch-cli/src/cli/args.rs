//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands with different visibility
//! (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Patterns file, whitespace-separated words (positional).
pub fn patterns_path_arg() -> Arg {
    Arg::new("patterns_path")
        .value_name("PATTERNS")
        .value_parser(value_parser!(PathBuf))
        .help("Patterns file (whitespace-separated words, '-' for stdin)")
}

/// Inline pattern (-p/--pattern), repeatable.
pub fn pattern_arg() -> Arg {
    Arg::new("patterns")
        .short('p')
        .long("pattern")
        .value_name("WORD")
        .action(ArgAction::Append)
        .help("Inline pattern (repeatable)")
}

/// Compiled automaton image (-a/--automaton).
pub fn automaton_arg() -> Arg {
    Arg::new("automaton_path")
        .short('a')
        .long("automaton")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Compiled automaton (from `acmatch compile`) instead of patterns")
}

/// Text file to search (positional).
pub fn text_path_arg() -> Arg {
    Arg::new("text_path")
        .value_name("TEXT")
        .value_parser(value_parser!(PathBuf))
        .help("Text file to search ('-' for stdin)")
}

/// Inline text (-t/--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .help("Inline text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output matches as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output matches as a JSON array")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Image output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the compiled automaton to FILE")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v to show failure links)")
}

/// Skip the match listing after the trace (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Show the trace only, without the match listing")
}
