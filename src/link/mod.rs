//! Symbolic-link entry restoration.
//!
//! An archive stores a symbolic link as an entry whose payload is the link's
//! target text. Restoring it sits right on the boundary between untrusted
//! archive data and the host filesystem, so this module keeps the steps
//! small and explicit:
//!
//! - [`payload`]: bounded read of the target text from the decoded stream
//! - [`checksum`]: CRC-32 over exactly the bytes that were kept
//! - [`extractor`]: the per-entry decision (create, skip, fail, verify only)
//!
//! ## Bounds
//!
//! The archive header's declared size is never trusted. At most
//! `capacity - 1` bytes are read (4095 by default); anything beyond that is
//! left unread and the checksum covers only what was kept, so a truncated
//! target shows up as a CRC mismatch against the archive's recorded value.
//!
//! ## Limitations
//!
//! - Link targets are not sanitized: absolute paths and `..` components are
//!   passed to the filesystem as-is
//! - An existing destination is never replaced

mod checksum;
mod extractor;
mod header;
mod outcome;
mod payload;

pub use checksum::{CRC_SEED, CrcCheck, crc32};
pub use extractor::LinkEntryExtractor;
pub use header::{ArchiveEntryHeader, EntryKind};
pub use outcome::ExtractionOutcome;
pub use payload::{LINK_TARGET_CAPACITY, LinkPayload};
