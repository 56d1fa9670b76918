//! Structural verification of an automaton.
//!
//! Compiled automata satisfy these by construction; loaded images are
//! untrusted input and must pass before matching can rely on them (failure
//! walks terminate, match offsets never underflow).

use acmatch_core::OutputSet;

use super::automaton::{Automaton, StateId};
use super::image::ImageError;

impl Automaton {
    /// Check every structural invariant of the state graph.
    pub fn verify(&self) -> Result<(), ImageError> {
        if self.pattern_count() > OutputSet::CAPACITY {
            return Err(ImageError::InvalidPattern {
                pattern: OutputSet::CAPACITY as u32,
                reason: "exceeds output set capacity",
            });
        }

        let root = self.state(StateId::ROOT);
        if root.depth != 0 || !root.failure.is_root() {
            return Err(corrupt(StateId::ROOT, "root must have depth 0 and fail to itself"));
        }

        let known = match self.pattern_count() {
            OutputSet::CAPACITY => u64::MAX,
            n => (1u64 << n) - 1,
        };

        let mut incoming = vec![0u32; self.state_count()];
        for (index, state) in self.states().iter().enumerate() {
            let id = StateId::new(index as u32);

            for (_, child) in state.edges() {
                if child.is_root() {
                    return Err(corrupt(id, "trie edge back to the root"));
                }
                if state.depth.checked_add(1) != Some(self.state(child).depth) {
                    return Err(corrupt(child, "depth is not parent depth + 1"));
                }
                incoming[child.index()] += 1;
            }

            if state.output.bits() & !known != 0 {
                return Err(corrupt(id, "output references an unknown pattern"));
            }
            if state
                .output
                .iter()
                .any(|p| self.pattern_len(p) > state.depth as usize)
            {
                return Err(corrupt(id, "output pattern longer than the state path"));
            }

            if id.is_root() {
                continue;
            }
            let failure = self.state(state.failure);
            if failure.depth >= state.depth {
                return Err(corrupt(id, "failure link does not shorten the path"));
            }
            if !failure.output.is_subset(state.output) {
                return Err(corrupt(id, "output misses the failure target's output"));
            }
        }

        for (index, &count) in incoming.iter().enumerate().skip(1) {
            if count != 1 {
                return Err(corrupt(
                    StateId::new(index as u32),
                    "state must have exactly one incoming trie edge",
                ));
            }
        }
        Ok(())
    }
}

fn corrupt(state: StateId, reason: &'static str) -> ImageError {
    ImageError::CorruptState {
        state: state.get(),
        reason,
    }
}
