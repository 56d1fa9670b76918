//! Shared input loading for every command.
//!
//! Patterns come from a file (whitespace-separated words), from repeated
//! `-p` flags, or from a compiled image. Text comes from a file (trimmed) or
//! from `-t`. A path of `-` reads stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use acmatch::{Automaton, ImageError};

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Input(#[from] acmatch::Error),

    #[error("invalid automaton '{}': {}", .path.display(), .source)]
    Image { path: PathBuf, source: ImageError },

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 1 for usage and input errors, 2 for I/O errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Read { .. } | CliError::Write { .. } => 2,
            CliError::Image {
                source: ImageError::Io(_),
                ..
            } => 2,
            _ => 1,
        }
    }
}

/// Where the automaton comes from.
#[derive(Clone, Debug, Default)]
pub struct AutomatonInput {
    pub patterns_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub automaton_path: Option<PathBuf>,
}

/// Where the text comes from.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    pub text_path: Option<PathBuf>,
    pub text: Option<String>,
}

impl AutomatonInput {
    fn reads_stdin(&self) -> bool {
        self.patterns_path.as_deref().is_some_and(is_stdin)
    }
}

/// Load the pattern list, in order, from -p flags or a patterns file.
pub fn load_patterns(input: &AutomatonInput) -> Result<Vec<String>, CliError> {
    match (&input.patterns_path, input.patterns.is_empty()) {
        (Some(_), false) => Err(CliError::Usage(
            "patterns file cannot be combined with -p/--pattern",
        )),
        (Some(path), true) => Ok(split_patterns(&read_input(path)?)),
        (None, false) => Ok(input.patterns.clone()),
        (None, true) => Err(CliError::Usage(
            "patterns are required: use positional argument, -p/--pattern, or -a/--automaton",
        )),
    }
}

/// Build the automaton from patterns, or load a compiled image.
pub fn load_automaton(input: &AutomatonInput) -> Result<Automaton, CliError> {
    let Some(path) = &input.automaton_path else {
        let patterns = load_patterns(input)?;
        return Ok(acmatch::build(&patterns)?);
    };
    if input.patterns_path.is_some() || !input.patterns.is_empty() {
        return Err(CliError::Usage(
            "--automaton cannot be combined with patterns",
        ));
    }
    Automaton::from_path(path).map_err(|source| CliError::Image {
        path: path.clone(),
        source,
    })
}

/// Load the text to search, trimmed of surrounding whitespace.
pub fn load_text(input: &TextInput, automaton: &AutomatonInput) -> Result<String, CliError> {
    if let Some(text) = &input.text {
        if input.text_path.is_some() {
            return Err(CliError::Usage("text file cannot be combined with -t/--text"));
        }
        return Ok(text.clone());
    }
    let Some(path) = &input.text_path else {
        return Err(CliError::Usage(
            "text is required: use positional argument or -t/--text",
        ));
    };
    if is_stdin(path) && automaton.reads_stdin() {
        return Err(CliError::Usage(
            "patterns and text cannot both be read from stdin",
        ));
    }
    Ok(read_input(path)?.trim().to_owned())
}

/// Split a patterns file into words.
pub fn split_patterns(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_owned).collect()
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    let read = if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
