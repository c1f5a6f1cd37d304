mod stream;

pub use stream::{Encoding, StreamCursor};

use std::io::Read;

/// Sequential reader over the decompressed bytes of the current entry
pub trait DataCursor {
    /// Read up to `buf.len()` bytes, returning how many were read (0 at end of stream)
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;
}

impl<R: Read + ?Sized> DataCursor for R {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Read::read(self, buf)
    }
}
