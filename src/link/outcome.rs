use std::fmt;

/// What happened to one archive entry handed to the link extractor.
///
/// Every variant except [`NotALink`](Self::NotALink) carries the CRC-32 of
/// the payload bytes that were actually read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    LinkCreated { checksum: u32 },
    /// Something already exists at the destination; left untouched
    LinkSkippedExists { checksum: u32 },
    LinkCreationFailed { checksum: u32 },
    /// Payload read and checksummed without touching the filesystem
    Verified { checksum: u32 },
    /// Not a link entry, or link support is disabled; no bytes consumed
    NotALink,
}

impl ExtractionOutcome {
    pub fn checksum(&self) -> Option<u32> {
        match *self {
            ExtractionOutcome::LinkCreated { checksum }
            | ExtractionOutcome::LinkSkippedExists { checksum }
            | ExtractionOutcome::LinkCreationFailed { checksum }
            | ExtractionOutcome::Verified { checksum } => Some(checksum),
            ExtractionOutcome::NotALink => None,
        }
    }

    pub fn is_link(&self) -> bool {
        !matches!(self, ExtractionOutcome::NotALink)
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::LinkCreated { .. } => f.write_str("linked"),
            ExtractionOutcome::LinkSkippedExists { .. } => f.write_str("skipped (exists)"),
            ExtractionOutcome::LinkCreationFailed { .. } => f.write_str("failed"),
            ExtractionOutcome::Verified { .. } => f.write_str("OK"),
            ExtractionOutcome::NotALink => f.write_str("not a link"),
        }
    }
}
