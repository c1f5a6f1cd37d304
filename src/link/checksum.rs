//! CRC-32 over link payloads.
//!
//! Uses the IEEE polynomial (the zlib/ZIP variant) and returns the finalized
//! value. Archivers that keep the raw register seeded with `0xffffffff` and
//! skip the final inversion (RAR does) hold exactly `!crc32(CRC_SEED, ..)`.
//! The checksum is only a consistency signal; a mismatch against the
//! archive's recorded value is how truncated or damaged link targets show up.

/// Conventional initial CRC value
pub const CRC_SEED: u32 = 0;

/// Continue a CRC-32 computation from `seed` over `bytes`
pub fn crc32(seed: u32, bytes: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(seed);
    hasher.update(bytes);
    hasher.finalize()
}

/// Result of comparing a computed CRC against the one recorded in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcCheck {
    Match,
    Mismatch { recorded: u32, computed: u32 },
    Unrecorded,
}

impl CrcCheck {
    pub fn compare(recorded: Option<u32>, computed: u32) -> Self {
        match recorded {
            None => CrcCheck::Unrecorded,
            Some(recorded) if recorded == computed => CrcCheck::Match,
            Some(recorded) => CrcCheck::Mismatch { recorded, computed },
        }
    }
}
