//! Human-readable automaton dump for debugging and documentation.
//!
//! Two sections: the pattern table (id, text) and the state table, one line
//! per state:
//!
//! ```text
//! <id> d<depth> ~<failure>  <symbol>:<child> ...  => <pattern>, ...
//! ```

use std::fmt::Write as _;

use acmatch_core::Colors;

use super::automaton::{Automaton, StateId};

/// Digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Generate a human-readable dump of the automaton.
pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let mut out = String::new();
    dump_patterns(&mut out, automaton, colors);
    out.push('\n');
    dump_states(&mut out, automaton, colors);
    out
}

fn dump_patterns(out: &mut String, automaton: &Automaton, c: Colors) {
    let width = width_for_count(automaton.pattern_count());
    writeln!(out, "[patterns]").unwrap();
    for (id, pattern) in automaton.patterns().iter().enumerate() {
        writeln!(out, "{id:>width$} {}", c.pattern(pattern)).unwrap();
    }
}

fn dump_states(out: &mut String, automaton: &Automaton, c: Colors) {
    let width = width_for_count(automaton.state_count());
    writeln!(out, "[states]").unwrap();

    for (index, state) in automaton.states().iter().enumerate() {
        let id = StateId::new(index as u32);
        let meta = format!("d{} ~{:>width$}", state.depth, state.failure.get());
        let mut line = format!("{} {}", c.state(format!("{:>width$}", id.get())), c.faint(meta));

        let edges: Vec<_> = state
            .edges()
            .map(|(sym, target)| format!("{sym}:{}", c.state(target)))
            .collect();
        if !edges.is_empty() {
            line.push_str("  ");
            line.push_str(&edges.join(" "));
        }

        if !state.output.is_empty() {
            let names: Vec<_> = state
                .output
                .iter()
                .map(|p| c.pattern(automaton.pattern(p)))
                .collect();
            write!(line, "  => {}", names.join(", ")).unwrap();
        }

        writeln!(out, "{line}").unwrap();
    }
}
