//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! match/trace/dump accept each other's flags, with irrelevant ones hidden
//! from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden text input args (for commands that don't read a text).
fn with_hidden_text_args(cmd: Command) -> Command {
    cmd.arg(text_path_arg().hide(true))
        .arg(text_arg().hide(true))
}

/// Add hidden output format args (for commands that don't list matches).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("acmatch")
        .about("Find every occurrence of a set of words in a text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(compile_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Report every pattern occurrence in a text.
///
/// Accepts trace flags for a unified CLI experience, but ignores them.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Report every pattern occurrence in a text")
        .override_usage(
            "\
  acmatch match <PATTERNS> <TEXT>
  acmatch match -p <WORD>... <TEXT>
  acmatch match -a <FILE> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  acmatch match patterns.txt text.txt         # two positional files
  acmatch match -p he -p she text.txt         # inline patterns + text file
  acmatch match -p he -p she -t ushers        # all inline
  acmatch match -a words.acm text.txt --json  # compiled automaton, JSON output"#,
        )
        .arg(patterns_path_arg())
        .arg(text_path_arg())
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(automaton_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd)
}

/// Compile patterns into a reusable automaton image.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile patterns into a reusable automaton image")
        .override_usage(
            "\
  acmatch compile <PATTERNS> -o <FILE>
  acmatch compile -p <WORD>... -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  acmatch compile patterns.txt -o words.acm
  acmatch compile -p he -p she -o words.acm"#,
        )
        .arg(patterns_path_arg())
        .arg(pattern_arg())
        .arg(output_file_arg().required(true))
}

/// Show the compiled automaton.
///
/// Accepts text and output flags for a unified CLI experience, but ignores them.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled automaton")
        .override_usage(
            "\
  acmatch dump <PATTERNS>
  acmatch dump -p <WORD>...
  acmatch dump -a <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  acmatch dump patterns.txt           # compile and show
  acmatch dump -p he -p she           # inline patterns
  acmatch dump -a words.acm           # inspect a compiled image"#,
        )
        .arg(patterns_path_arg())
        .arg(pattern_arg())
        .arg(automaton_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_output_args(with_hidden_text_args(cmd)))
}

/// Trace the matcher step by step.
///
/// Accepts match output flags for a unified CLI experience, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the matcher step by step for debugging")
        .override_usage(
            "\
  acmatch trace <PATTERNS> <TEXT>
  acmatch trace -p <WORD>... <TEXT>
  acmatch trace -a <FILE> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  acmatch trace patterns.txt text.txt         # two positional files
  acmatch trace -p he -p she -t ushers        # all inline
  acmatch trace -p he -p she -t ushers -v     # also show failure links"#,
        )
        .arg(patterns_path_arg())
        .arg(text_path_arg())
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(automaton_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .arg(no_result_arg());

    with_hidden_output_args(cmd)
}
