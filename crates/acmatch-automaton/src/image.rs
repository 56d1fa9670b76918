//! Binary image encoding and loading.
//!
//! An image is the compiled automaton frozen to bytes, so a pattern set can
//! be compiled once and reused across processes without rebuilding.

use std::io;
use std::path::Path;

use acmatch_core::{ALPHABET_SIZE, OutputSet};

use super::automaton::{Automaton, State, StateId};
use super::header::Header;
use super::invariants::ensure_u32;
use super::{HEADER_SIZE, STATE_SIZE, VERSION};

/// Encoded value of an absent child slot.
const NO_CHILD: u32 = u32::MAX;

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(buf)
}

/// Image load error.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("invalid magic: expected ACMA")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("file too small: {0} bytes (minimum {HEADER_SIZE})")]
    FileTooSmall(usize),
    #[error("size mismatch: header says {header} bytes, got {actual}")]
    SizeMismatch { header: u64, actual: usize },
    #[error("checksum mismatch: header says {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("invalid pattern #{pattern}: {reason}")]
    InvalidPattern { pattern: u32, reason: &'static str },
    #[error("corrupt state {state}: {reason}")]
    CorruptState { state: u32, reason: &'static str },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Automaton {
    /// Encode the automaton as a binary image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let blob_size: usize = self.patterns().iter().map(String::len).sum();
        let mut header = Header {
            states_count: ensure_u32(self.state_count(), "state count"),
            patterns_count: ensure_u32(self.pattern_count(), "pattern count"),
            pattern_blob_size: ensure_u32(blob_size, "pattern blob size"),
            ..Header::default()
        };

        let mut out = Vec::with_capacity(header.compute_offsets().end as usize);
        out.extend_from_slice(&[0; HEADER_SIZE]);

        for state in self.states() {
            for child in &state.children {
                let raw = child.map_or(NO_CHILD, StateId::get);
                out.extend_from_slice(&raw.to_le_bytes());
            }
            out.extend_from_slice(&state.failure.get().to_le_bytes());
            out.extend_from_slice(&state.output.bits().to_le_bytes());
            out.extend_from_slice(&state.depth.to_le_bytes());
        }
        for pattern in self.patterns() {
            out.extend_from_slice(&ensure_u32(pattern.len(), "pattern length").to_le_bytes());
        }
        for pattern in self.patterns() {
            out.extend_from_slice(pattern.as_bytes());
        }

        header.total_size = ensure_u32(out.len(), "image size");
        header.checksum = crc32fast::hash(&out[HEADER_SIZE..]);
        out[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
        out
    }

    /// Load an automaton from an image file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Load an automaton from image bytes.
    ///
    /// The decoded automaton is verified before it is returned, so a
    /// successfully loaded image is always safe to match with.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ImageError::FileTooSmall(bytes.len()));
        }

        let header = Header::from_bytes(&bytes[..HEADER_SIZE]);

        if !header.validate_magic() {
            return Err(ImageError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ImageError::UnsupportedVersion(header.version));
        }
        if header.total_size as usize != bytes.len() {
            return Err(ImageError::SizeMismatch {
                header: header.total_size as u64,
                actual: bytes.len(),
            });
        }

        let checksum = crc32fast::hash(&bytes[HEADER_SIZE..]);
        if checksum != header.checksum {
            return Err(ImageError::ChecksumMismatch {
                expected: header.checksum,
                actual: checksum,
            });
        }

        if header.states_count == 0 {
            return Err(ImageError::CorruptState {
                state: 0,
                reason: "missing root state",
            });
        }

        let offsets = header.compute_offsets();
        if offsets.end != bytes.len() as u64 {
            return Err(ImageError::SizeMismatch {
                header: offsets.end,
                actual: bytes.len(),
            });
        }

        let states_bytes = &bytes[offsets.states as usize..offsets.pattern_lens as usize];
        let states = states_bytes
            .chunks_exact(STATE_SIZE)
            .enumerate()
            .map(|(id, chunk)| decode_state(chunk, id as u32, header.states_count))
            .collect::<Result<Vec<_>, _>>()?;

        let lens = &bytes[offsets.pattern_lens as usize..offsets.pattern_blob as usize];
        let blob = &bytes[offsets.pattern_blob as usize..];
        let patterns = decode_patterns(lens, blob)?;

        let automaton = Automaton::new(states, patterns);
        automaton.verify()?;
        Ok(automaton)
    }
}

fn decode_state(bytes: &[u8], id: u32, states_count: u32) -> Result<State, ImageError> {
    let corrupt = |reason| ImageError::CorruptState { state: id, reason };
    let fields = ALPHABET_SIZE * 4;

    let mut state = State::new(read_u32_le(bytes, fields + 12));
    for (slot, child) in state.children.iter_mut().enumerate() {
        let raw = read_u32_le(bytes, slot * 4);
        if raw == NO_CHILD {
            continue;
        }
        if raw >= states_count {
            return Err(corrupt("child index out of range"));
        }
        *child = Some(StateId::new(raw));
    }

    let failure = read_u32_le(bytes, fields);
    if failure >= states_count {
        return Err(corrupt("failure index out of range"));
    }
    state.failure = StateId::new(failure);
    state.output = OutputSet::from_bits(read_u64_le(bytes, fields + 4));
    Ok(state)
}

fn decode_patterns(lens: &[u8], blob: &[u8]) -> Result<Vec<String>, ImageError> {
    let mut patterns = Vec::with_capacity(lens.len() / 4);
    let mut cursor = 0usize;

    for (index, chunk) in lens.chunks_exact(4).enumerate() {
        let invalid = |reason| ImageError::InvalidPattern {
            pattern: index as u32,
            reason,
        };
        let len = read_u32_le(chunk, 0) as usize;
        let end = cursor
            .checked_add(len)
            .filter(|&end| end <= blob.len())
            .ok_or_else(|| invalid("extends past the pattern blob"))?;
        let bytes = &blob[cursor..end];
        if bytes.is_empty() {
            return Err(invalid("empty pattern"));
        }
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(invalid("symbol outside a-z"));
        }
        let text = std::str::from_utf8(bytes).map_err(|_| invalid("not valid UTF-8"))?;
        patterns.push(text.to_owned());
        cursor = end;
    }

    if cursor != blob.len() {
        return Err(ImageError::InvalidPattern {
            pattern: patterns.len() as u32,
            reason: "trailing bytes in the pattern blob",
        });
    }
    Ok(patterns)
}
