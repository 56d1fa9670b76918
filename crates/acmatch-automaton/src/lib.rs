//! Compiled Aho-Corasick automaton for acmatch.
//!
//! This crate contains:
//! - The immutable state arena ([`Automaton`], [`State`], [`StateId`])
//! - The binary image format (header, encode/decode, load errors)
//! - A human-readable state table dump

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod dump;
mod header;
mod image;
mod invariants;
mod verify;


pub use automaton::{Automaton, State, StateId};
pub use dump::{dump, width_for_count};
pub use header::{Header, SectionOffsets};
pub use image::ImageError;

/// Magic bytes at the start of every image.
pub const MAGIC: [u8; 4] = *b"ACMA";

/// Current image format version.
pub const VERSION: u32 = 1;

/// Size of the image header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Size of one encoded state: 26 child slots, failure, output mask, depth.
pub const STATE_SIZE: usize = acmatch_core::ALPHABET_SIZE * 4 + 4 + 8 + 4;
