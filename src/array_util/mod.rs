use std::ops::{Index, IndexMut, Range};

use byteorder::ByteOrder;


/// the block length in bytes shared by MD5 and SHA-256
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the block length in 32 bit words
pub const BLOCK_LENGTH_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// the block length in 64 bit words
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 8;

/// Copies the ``source`` array to the ``dest`` array, interpreting every four bytes of ``source`` as one integer in
/// the byte order ``B``. ``source`` must be at least four times bigger than ``dest``.
pub fn align_to_u32a<B: ByteOrder>(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);
    B::read_u32_into(&source[..dest.len() * 4], dest);
}

/// One 64 byte block of (possibly padded) message data.
///
/// The block can be viewed as 64 bytes, as 16 words or as 8 double words. Only the bytes are stored; the word views
/// are computed on demand with an explicit byte order, so they can never disagree with the byte view.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteBlock([u8; BLOCK_LENGTH_BYTES]);

impl ByteBlock {
    pub const fn zeroed() -> Self {
        ByteBlock([0; BLOCK_LENGTH_BYTES])
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LENGTH_BYTES] {
        &self.0
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; BLOCK_LENGTH_BYTES] {
        &mut self.0
    }

    /// The block as 16 words in byte order ``B``.
    pub fn words<B: ByteOrder>(&self) -> [u32; BLOCK_LENGTH_WORDS] {
        let mut words = [0u32; BLOCK_LENGTH_WORDS];
        align_to_u32a::<B>(&mut words, &self.0);
        words
    }

    /// The block as 8 double words in byte order ``B``.
    pub fn double_words<B: ByteOrder>(&self) -> [u64; BLOCK_LENGTH_DOUBLE_WORDS] {
        let mut double_words = [0u64; BLOCK_LENGTH_DOUBLE_WORDS];
        B::read_u64_into(&self.0, &mut double_words);
        double_words
    }

    pub fn double_word<B: ByteOrder>(&self, index: usize) -> u64 {
        B::read_u64(&self.0[index * 8..(index + 1) * 8])
    }

    pub fn set_word<B: ByteOrder>(&mut self, index: usize, value: u32) {
        B::write_u32(&mut self.0[index * 4..(index + 1) * 4], value);
    }

    pub fn set_double_word<B: ByteOrder>(&mut self, index: usize, value: u64) {
        B::write_u64(&mut self.0[index * 8..(index + 1) * 8], value);
    }

    pub fn zero_fill(&mut self, range: Range<usize>) {
        self.0[range].iter_mut().for_each(|b| *b = 0);
    }
}

impl Default for ByteBlock {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[u8; BLOCK_LENGTH_BYTES]> for ByteBlock {
    fn from(bytes: [u8; BLOCK_LENGTH_BYTES]) -> Self {
        ByteBlock(bytes)
    }
}

impl<I> Index<I> for ByteBlock
where
    [u8]: Index<I>,
{
    type Output = <[u8] as Index<I>>::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.0.as_slice(), index)
    }
}

impl<I> IndexMut<I> for ByteBlock
where
    [u8]: IndexMut<I>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.0.as_mut_slice(), index)
    }
}

impl std::fmt::Debug for ByteBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&hex::encode(&self.0[..]))
    }
}
