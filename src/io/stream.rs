use anyhow::{Context, Result};
use flate2::read::DeflateDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// How the entry's bytes are stored in the underlying source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Raw bytes, no compression
    #[default]
    Stored,
    /// Raw DEFLATE stream (no zlib/gzip wrapper), as found in ZIP entries
    Deflate,
}

enum Decoder<R: Read> {
    Stored(R),
    Deflate(DeflateDecoder<R>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decoder::Stored(r) => r.read(buf),
            Decoder::Deflate(r) => r.read(buf),
        }
    }
}

/// Sequential cursor over a decoded entry stream.
///
/// Counts every decoded byte handed out, so callers can check that the
/// stream position advanced by exactly what an operation consumed.
pub struct StreamCursor<R: Read> {
    inner: Decoder<R>,
    consumed: u64,
}

impl<R: Read> StreamCursor<R> {
    /// Cursor over bytes that are already decoded
    pub fn new(reader: R) -> Self {
        Self::decoded(reader, Encoding::Stored)
    }

    /// Cursor that decodes `reader` according to `encoding`
    pub fn decoded(reader: R, encoding: Encoding) -> Self {
        let inner = match encoding {
            Encoding::Stored => Decoder::Stored(reader),
            Encoding::Deflate => Decoder::Deflate(DeflateDecoder::new(reader)),
        };
        Self { inner, consumed: 0 }
    }

    /// Number of decoded bytes read so far
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl StreamCursor<BufReader<File>> {
    /// Open a local file holding a single entry's stream
    pub fn open(path: &Path, encoding: Encoding) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Self::decoded(BufReader::new(file), encoding))
    }
}

impl<R: Read> Read for StreamCursor<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::DeflateEncoder;
    use std::io::Write;

    #[test]
    fn stored_counts_consumed_bytes() {
        let mut cursor = StreamCursor::new(&b"target/path"[..]);
        let mut buf = [0u8; 6];
        cursor.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"target");
        assert_eq!(cursor.consumed(), 6);
    }

    #[test]
    fn deflate_yields_decoded_bytes() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"../lib/libfoo.so.1").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut cursor = StreamCursor::decoded(&compressed[..], Encoding::Deflate);
        let mut out = Vec::new();
        cursor.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"../lib/libfoo.so.1");
        assert_eq!(cursor.consumed(), out.len() as u64);
    }

    #[test]
    fn open_missing_file_fails() {
        let err = StreamCursor::open(Path::new("/nonexistent/runlink/payload"), Encoding::Stored)
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to open"));
    }
}
