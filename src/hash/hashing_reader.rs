use std::io::{Error, ErrorKind, Read};

use crate::hash::Hasher;

/// Hashes everything that is read through it.
pub struct HashingReader<R: Read, H: Hasher> {
    reader: R,
    hasher: H,
    nread: u64,
}

impl<R: Read, H: Hasher> HashingReader<R, H> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            hasher: H::new(),
            nread: 0,
        }
    }

    /// Read the rest of the underlying reader, discarding the data.
    pub fn consume(&mut self) -> Result<(), Error> {
        let mut buf = [0_u8; BUFFER_LEN];
        loop {
            match self.read(&mut buf[..]) {
                Ok(0) => return Ok(()),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume the rest of the reader and return the digest together with the total number of bytes read.
    pub fn digest(mut self) -> Result<(H::Output, u64), Error> {
        self.consume()?;
        Ok((self.hasher.finalize(), self.nread))
    }
}

impl<R: Read, H: Hasher> Read for HashingReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let n = self.reader.read(buf)?;
        self.nread += n as u64;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

pub(crate) const BUFFER_LEN: usize = 4096;
