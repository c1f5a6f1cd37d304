//! # runlink
//!
//! Restores symbolic-link entries from archives.
//!
//! A link entry's payload is the link's target path. This library reads that
//! payload out of an entry's decoded data stream with a hard size bound,
//! computes its CRC-32, and then either creates the link, skips it because
//! the destination already exists, or records a warning-level failure. No
//! single bad link entry stops an extraction job.
//!
//! ## Features
//!
//! - Bounded target reads regardless of the size declared by the archive
//! - CRC-32 over exactly the bytes kept, for comparison with the archive's record
//! - Test-only mode that reads and checksums without touching the filesystem
//! - Job-wide, monotonic severity register shared between entries
//! - STORED and raw DEFLATE entry streams
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use runlink::{
//!     ArchiveEntryHeader, Encoding, EntryKind, ErrorRegister, LinkEntryExtractor, StreamCursor,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let register = ErrorRegister::new();
//!     let extractor = LinkEntryExtractor::new("dist.zip", register.clone());
//!
//!     let header = ArchiveEntryHeader::new("bin/sh", EntryKind::Symlink, 7);
//!     let mut cursor = StreamCursor::open(Path::new("bin-sh.payload"), Encoding::Deflate)?;
//!
//!     let outcome = extractor.extract(&mut cursor, &header, Path::new("out/bin/sh"), true)?;
//!     println!("{outcome} crc32={:08x}", outcome.checksum().unwrap_or(0));
//!     std::process::exit(register.current().exit_code());
//! }
//! ```

pub mod cli;
pub mod error;
pub mod fs;
pub mod io;
pub mod link;
pub mod severity;
pub mod sink;

pub use cli::Cli;
pub use error::{Error, Result};
pub use fs::{HostFs, LinkFs};
pub use io::{DataCursor, Encoding, StreamCursor};
pub use link::{
    ArchiveEntryHeader, CrcCheck, EntryKind, ExtractionOutcome, LINK_TARGET_CAPACITY,
    LinkEntryExtractor, LinkPayload,
};
pub use severity::{ErrorRegister, Severity};
pub use sink::{LogSink, TracingSink};
