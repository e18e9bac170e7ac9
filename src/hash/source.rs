use std::convert::Infallible;
use std::io::{self, ErrorKind, Read};

/// Anything that message bytes can be pulled from.
///
/// A source hands out up to `buf.len()` bytes per call and reports explicitly whether it is exhausted. A source
/// that reports exhaustion must keep returning `(0, true)` on every further call, without touching whatever it
/// reads from.
pub trait ByteSource {
    type Error;

    /// Read up to `buf.len()` bytes into `buf`.
    ///
    /// #Output
    /// The number of bytes written to the start of `buf` and whether the source is exhausted after this read.
    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<(usize, bool), Self::Error>;
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<(usize, bool), Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok((n, self.is_empty()))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<(usize, bool), Self::Error> {
        (**self).read_up_to(buf)
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// `Read` only signals the end of its data by returning zero bytes, so the source keeps a single byte of lookahead:
/// after every read that filled the buffer it pulls one more byte to learn whether anything is left. A file whose
/// length is a multiple of the block size is therefore recognised as finished as soon as its last block is read.
pub struct ReaderSource<R> {
    reader: R,
    lookahead: Option<u8>,
    exhausted: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lookahead: None,
            exhausted: false,
        }
    }

    fn peek(&mut self) -> io::Result<()> {
        let mut byte = [0_u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(());
                }
                Ok(_) => {
                    self.lookahead = Some(byte[0]);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    type Error = io::Error;

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<(usize, bool), Self::Error> {
        if buf.is_empty() {
            return Ok((0, self.exhausted));
        }
        let mut filled = 0;
        if let Some(byte) = self.lookahead.take() {
            buf[0] = byte;
            filled = 1;
        }
        while filled < buf.len() && !self.exhausted {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        if !self.exhausted {
            self.peek()?;
        }
        Ok((filled, self.exhausted))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Hands out at most `chunk` bytes per `read` call.
    pub(crate) struct Trickle<'a> {
        pub data: &'a [u8],
        pub chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Yields `data`, then fails.
    pub(crate) struct Failing<'a> {
        pub data: &'a [u8],
    }

    impl Read for Failing<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "source went away"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Interrupts every other read.
    struct Flaky<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_slice_source() {
        let mut source: &[u8] = b"hello world";
        let mut buf = [0_u8; 8];
        assert_eq!(source.read_up_to(&mut buf), Ok((8, false)));
        assert_eq!(&buf, b"hello wo");
        assert_eq!(source.read_up_to(&mut buf), Ok((3, true)));
        assert_eq!(&buf[..3], b"rld");
        assert_eq!(source.read_up_to(&mut buf), Ok((0, true)));
    }

    #[test]
    fn test_slice_source_exact_fit_is_exhausted() {
        let mut source: &[u8] = &[7_u8; 8];
        let mut buf = [0_u8; 8];
        assert_eq!(source.read_up_to(&mut buf), Ok((8, true)));
    }

    #[test]
    fn test_reader_source_fills_from_small_reads() {
        let data = (0..100).collect::<Vec<u8>>();
        let mut source = ReaderSource::new(Trickle { data: &data, chunk: 3 });
        let mut buf = [0_u8; 64];

        let (n, exhausted) = source.read_up_to(&mut buf).unwrap();
        assert_eq!((n, exhausted), (64, false));
        assert_eq!(&buf[..], &data[..64]);

        let (n, exhausted) = source.read_up_to(&mut buf).unwrap();
        assert_eq!((n, exhausted), (36, true));
        assert_eq!(&buf[..36], &data[64..]);
    }

    #[test]
    fn test_reader_source_detects_aligned_end() {
        let data = [0xAB_u8; 128];
        let mut source = ReaderSource::new(&data[..]);
        let mut buf = [0_u8; 64];

        assert_eq!(source.read_up_to(&mut buf).unwrap(), (64, false));
        assert_eq!(source.read_up_to(&mut buf).unwrap(), (64, true));
        assert_eq!(source.read_up_to(&mut buf).unwrap(), (0, true));
    }

    #[test]
    fn test_reader_source_retries_interrupted() {
        let data = b"interrupted but not broken";
        let mut source = ReaderSource::new(Flaky { data, interrupt: false });
        let mut buf = [0_u8; 64];

        let (n, exhausted) = source.read_up_to(&mut buf).unwrap();
        assert_eq!((n, exhausted), (data.len(), true));
        assert_eq!(&buf[..n], &data[..]);
    }

    #[test]
    fn test_reader_source_propagates_errors() {
        let mut source = ReaderSource::new(Failing { data: &[1, 2, 3] });
        let mut buf = [0_u8; 64];

        let error = source.read_up_to(&mut buf).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BrokenPipe);
    }
}
