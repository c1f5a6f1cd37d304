use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::fs::{HostFs, LinkFs};
use crate::io::DataCursor;
use crate::severity::{ErrorRegister, Severity};
use crate::sink::{LogSink, TracingSink};

use super::checksum::{CRC_SEED, crc32};
use super::header::ArchiveEntryHeader;
use super::outcome::ExtractionOutcome;
use super::payload::{LINK_TARGET_CAPACITY, LinkPayload};

/// Restores symbolic-link entries from a decoded archive stream.
///
/// One call to [`extract`](Self::extract) handles one entry: it reads the
/// link target (bounded by the payload capacity), checksums it, and, when
/// asked to, creates the link. Link creation problems never abort the job;
/// they are logged, raise the shared [`ErrorRegister`], and come back as an
/// [`ExtractionOutcome`].
///
/// ## Example
///
/// ```no_run
/// use std::io::Cursor;
/// use std::path::Path;
/// use runlink::{ArchiveEntryHeader, EntryKind, ErrorRegister, LinkEntryExtractor};
///
/// let extractor = LinkEntryExtractor::new("backup.zip", ErrorRegister::new());
/// let header = ArchiveEntryHeader::new("lib/libz.so", EntryKind::Symlink, 11);
/// let mut stream = Cursor::new(b"libz.so.1.3".to_vec());
/// let outcome = extractor.extract(&mut stream, &header, Path::new("out/lib/libz.so"), true)?;
/// println!("{outcome}");
/// # Ok::<(), runlink::Error>(())
/// ```
pub struct LinkEntryExtractor<F: LinkFs = HostFs, S: LogSink = TracingSink> {
    archive: String,
    register: ErrorRegister,
    link_support: bool,
    capacity: usize,
    fs: F,
    sink: S,
}

impl LinkEntryExtractor {
    /// Extractor for entries of `archive` that writes to the host filesystem
    pub fn new(archive: impl Into<String>, register: ErrorRegister) -> Self {
        Self {
            archive: archive.into(),
            register,
            link_support: true,
            capacity: LINK_TARGET_CAPACITY,
            fs: HostFs,
            sink: TracingSink,
        }
    }
}

impl<F: LinkFs, S: LogSink> LinkEntryExtractor<F, S> {
    /// Whether this build/platform restores links at all.
    ///
    /// Without link support every entry is reported as
    /// [`ExtractionOutcome::NotALink`] and nothing is read from the stream.
    pub fn with_link_support(mut self, enabled: bool) -> Self {
        self.link_support = enabled;
        self
    }

    /// Payload buffer capacity including the terminator
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_fs<G: LinkFs>(self, fs: G) -> LinkEntryExtractor<G, S> {
        LinkEntryExtractor {
            archive: self.archive,
            register: self.register,
            link_support: self.link_support,
            capacity: self.capacity,
            fs,
            sink: self.sink,
        }
    }

    pub fn with_sink<T: LogSink>(self, sink: T) -> LinkEntryExtractor<F, T> {
        LinkEntryExtractor {
            archive: self.archive,
            register: self.register,
            link_support: self.link_support,
            capacity: self.capacity,
            fs: self.fs,
            sink,
        }
    }

    pub fn link_support(&self) -> bool {
        self.link_support
    }

    pub fn register(&self) -> &ErrorRegister {
        &self.register
    }

    /// Handle one entry.
    ///
    /// `cursor` must be positioned at the start of the entry's decoded data;
    /// it advances by exactly the number of payload bytes read. With
    /// `create` unset the filesystem and the register are never touched.
    ///
    /// The target text is used verbatim up to its first NUL: absolute
    /// targets and `..` components are not rejected here. The checksum
    /// always covers every byte read, including anything after a NUL.
    ///
    /// # Errors
    ///
    /// Only failures reading `cursor` are returned as errors.
    pub fn extract<C: DataCursor + ?Sized>(
        &self,
        cursor: &mut C,
        header: &ArchiveEntryHeader,
        destination: &Path,
        create: bool,
    ) -> Result<ExtractionOutcome> {
        if !self.link_support || !header.is_symlink() {
            return Ok(ExtractionOutcome::NotALink);
        }

        let payload = LinkPayload::read_from(cursor, header.declared_size, self.capacity)?;
        let checksum = crc32(CRC_SEED, payload.as_bytes());
        if (payload.len() as u64) < header.declared_size {
            tracing::debug!(
                entry = %header.name,
                declared = header.declared_size,
                kept = payload.len(),
                "link target shorter than declared size"
            );
        }

        if !create {
            return Ok(ExtractionOutcome::Verified { checksum });
        }

        Ok(self.materialize(&payload, destination, checksum))
    }

    fn materialize(
        &self,
        payload: &LinkPayload,
        destination: &Path,
        checksum: u32,
    ) -> ExtractionOutcome {
        let dest = destination.display().to_string();

        // only the link itself may be "already there"; a blocked parent is a failure
        if let Err(e) = self.fs.ensure_parent_directories(destination) {
            return self.fail(&dest, &e, checksum);
        }

        match self.fs.create_symlink(&payload.to_os_string(), destination) {
            Ok(()) => {
                tracing::debug!(
                    link = %dest,
                    target = %String::from_utf8_lossy(payload.target()),
                    "created symbolic link"
                );
                ExtractionOutcome::LinkCreated { checksum }
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                self.sink.info(&self.archive, "symbolic link already exists, skipping", &dest);
                ExtractionOutcome::LinkSkippedExists { checksum }
            }
            Err(e) => self.fail(&dest, &e, checksum),
        }
    }

    fn fail(&self, dest: &str, err: &std::io::Error, checksum: u32) -> ExtractionOutcome {
        self.sink.error(
            &self.archive,
            "cannot create symbolic link",
            &format!("{dest}: {err}"),
        );
        self.register.raise_at_least(Severity::Warning);
        ExtractionOutcome::LinkCreationFailed { checksum }
    }
}
