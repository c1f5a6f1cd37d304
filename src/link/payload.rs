use std::ffi::OsString;
use std::io::ErrorKind;

use crate::error::{Error, Result};
use crate::io::DataCursor;

/// Default payload capacity, terminator included (Linux `PATH_MAX`)
pub const LINK_TARGET_CAPACITY: usize = 4096;

/// Link target text read from an entry's stream.
///
/// Never holds more than `capacity - 1` bytes and always ends with a NUL
/// terminator that is not part of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPayload {
    buf: Vec<u8>,
}

impl LinkPayload {
    /// Read `min(declared, capacity - 1)` bytes from `cursor`.
    ///
    /// Bytes past that bound are left in the stream. If the stream ends
    /// first, the payload holds what was available.
    pub fn read_from<C: DataCursor + ?Sized>(
        cursor: &mut C,
        declared: u64,
        capacity: usize,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let limit = usize::try_from(declared)
            .unwrap_or(usize::MAX)
            .min(capacity - 1);

        let mut buf = vec![0u8; limit + 1];
        let mut filled = 0;
        while filled < limit {
            match cursor.read(&mut buf[filled..limit]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);
        buf.push(0);
        Ok(Self { buf })
    }

    /// Every byte read, without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    /// Link target text: the bytes before the first NUL.
    ///
    /// An embedded NUL ends the target the same way the terminator does; the
    /// bytes after it are still part of [`as_bytes`](Self::as_bytes).
    pub fn target(&self) -> &[u8] {
        let end = self.buf.iter().position(|&b| b == 0).unwrap_or(self.buf.len());
        &self.buf[..end]
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// [`target`](Self::target) as an OS string, byte for byte on Unix
    pub fn to_os_string(&self) -> OsString {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            std::ffi::OsStr::from_bytes(self.target()).to_os_string()
        }

        #[cfg(not(unix))]
        {
            OsString::from(String::from_utf8_lossy(self.target()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn reads_declared_bytes_only() {
        let mut cursor = Cursor::new(b"libfoo.so.1NEXT-ENTRY".to_vec());
        let payload = LinkPayload::read_from(&mut cursor, 11, LINK_TARGET_CAPACITY).unwrap();
        assert_eq!(payload.as_bytes(), b"libfoo.so.1");
        assert_eq!(payload.buf, b"libfoo.so.1\0");
        assert_eq!(payload.target(), b"libfoo.so.1");
        assert_eq!(cursor.position(), 11);
    }

    #[test]
    fn caps_at_capacity_minus_one() {
        let mut cursor = Cursor::new(vec![b'a'; 64]);
        let payload = LinkPayload::read_from(&mut cursor, 64, 16).unwrap();
        assert_eq!(payload.len(), 15);
        assert_eq!(cursor.position(), 15);
        assert_eq!(payload.buf.last(), Some(&0));
    }

    #[test]
    fn huge_declared_size_is_bounded() {
        let mut cursor = Cursor::new(vec![b'x'; 32]);
        let payload = LinkPayload::read_from(&mut cursor, u64::MAX, 8).unwrap();
        assert_eq!(payload.as_bytes(), b"xxxxxxx");
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn capacity_one_reads_nothing() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        let payload = LinkPayload::read_from(&mut cursor, 3, 1).unwrap();
        assert!(payload.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn embedded_nul_ends_target_but_not_payload() {
        let mut cursor = Cursor::new(b"tgt\0junk".to_vec());
        let payload = LinkPayload::read_from(&mut cursor, 8, LINK_TARGET_CAPACITY).unwrap();
        assert_eq!(payload.as_bytes(), b"tgt\0junk");
        assert_eq!(payload.target(), b"tgt");
        assert_eq!(payload.to_os_string(), OsString::from("tgt"));
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        assert!(matches!(
            LinkPayload::read_from(&mut cursor, 3, 0),
            Err(Error::ZeroCapacity)
        ));
    }

    #[test]
    fn short_stream_keeps_available_bytes() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        let payload = LinkPayload::read_from(&mut cursor, 10, LINK_TARGET_CAPACITY).unwrap();
        assert_eq!(payload.as_bytes(), b"abc");
    }

    /// Hands out one byte per call and interrupts every other call
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn short_reads_and_interrupts_are_retried() {
        let mut cursor = Trickle {
            data: b"../share/doc".to_vec(),
            pos: 0,
            interrupt: false,
        };
        let payload = LinkPayload::read_from(&mut cursor, 8, LINK_TARGET_CAPACITY).unwrap();
        assert_eq!(payload.as_bytes(), b"../share");
        assert_eq!(cursor.pos, 8);
    }

    #[test]
    fn read_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("inflate failed"))
            }
        }
        assert!(matches!(
            LinkPayload::read_from(&mut Broken, 4, LINK_TARGET_CAPACITY),
            Err(Error::Read(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_target_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;
        let mut cursor = Cursor::new(vec![b'a', 0xff, b'b']);
        let payload = LinkPayload::read_from(&mut cursor, 3, LINK_TARGET_CAPACITY).unwrap();
        assert_eq!(payload.to_os_string().as_bytes(), &[b'a', 0xff, b'b']);
    }
}
