//! Binary image header (32 bytes).
//!
//! Section order: Header → States → PatternLengths → PatternBlob

use super::{HEADER_SIZE, MAGIC, STATE_SIZE, VERSION};

/// Image header - first 32 bytes of the image.
///
/// Layout (all little-endian):
/// - 0-15: identity and sizes (magic, version, checksum, total_size)
/// - 16-27: counts (states, patterns, pattern blob bytes)
/// - 28-31: reserved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Magic bytes: b"ACMA"
    pub magic: [u8; 4],
    pub version: u32,
    /// CRC32 of everything after the header
    pub checksum: u32,
    /// Total image size in bytes
    pub total_size: u32,
    pub states_count: u32,
    pub patterns_count: u32,
    pub pattern_blob_size: u32,
    pub _reserved: [u8; 4],
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            checksum: 0,
            total_size: 0,
            states_count: 0,
            patterns_count: 0,
            pattern_blob_size: 0,
            _reserved: [0; 4],
        }
    }
}

/// Byte offsets of each section, derived from the header counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionOffsets {
    pub states: u64,
    pub pattern_lens: u64,
    pub pattern_blob: u64,
    /// One past the last byte; equals the expected image size.
    pub end: u64,
}

impl Header {
    /// Decode header from the first 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= HEADER_SIZE, "header too short");

        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: u32_at(4),
            checksum: u32_at(8),
            total_size: u32_at(12),
            states_count: u32_at(16),
            patterns_count: u32_at(20),
            pattern_blob_size: u32_at(24),
            _reserved: [bytes[28], bytes[29], bytes[30], bytes[31]],
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.total_size.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.states_count.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.patterns_count.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.pattern_blob_size.to_le_bytes());
        bytes[28..32].copy_from_slice(&self._reserved);
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }

    /// Compute section offsets from counts.
    ///
    /// Computed in `u64` so that hostile counts cannot overflow before the
    /// size check rejects them.
    pub fn compute_offsets(&self) -> SectionOffsets {
        let states = HEADER_SIZE as u64;
        let pattern_lens = states + self.states_count as u64 * STATE_SIZE as u64;
        let pattern_blob = pattern_lens + self.patterns_count as u64 * 4;
        let end = pattern_blob + self.pattern_blob_size as u64;

        SectionOffsets {
            states,
            pattern_lens,
            pattern_blob,
            end,
        }
    }
}
