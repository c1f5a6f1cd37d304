/// Unix file-type mask and the types we classify
const S_IFMT: u32 = 0o170000;
const S_IFDIR: u32 = 0o040000;
const S_IFLNK: u32 = 0o120000;

/// What an archive entry represents on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

impl EntryKind {
    /// Classify from Unix `st_mode` bits
    pub fn from_unix_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFLNK => EntryKind::Symlink,
            S_IFDIR => EntryKind::Directory,
            _ => EntryKind::File,
        }
    }

    /// Classify from ZIP external attributes, which carry the Unix mode in the high 16 bits
    pub fn from_external_attributes(attributes: u32) -> Self {
        Self::from_unix_mode(attributes >> 16)
    }
}

/// Already-parsed metadata of one archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntryHeader {
    /// Name used in diagnostics
    pub name: String,
    pub kind: EntryKind,
    /// Payload size as declared by the archive; not trusted
    pub declared_size: u64,
    /// CRC-32 recorded by the archive, if any
    pub recorded_crc: Option<u32>,
}

impl ArchiveEntryHeader {
    pub fn new(name: impl Into<String>, kind: EntryKind, declared_size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_size,
            recorded_crc: None,
        }
    }

    pub fn with_recorded_crc(mut self, crc: u32) -> Self {
        self.recorded_crc = Some(crc);
        self
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
