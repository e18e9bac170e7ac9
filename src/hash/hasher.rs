use crate::array_util::{ByteBlock, BLOCK_LENGTH_BYTES};
use crate::hash::merkle_damgard::{Digester, MerkleDamgardHash};

/// A hash that is fed by pushing data into it.
pub trait Hasher {
    type Output;

    fn new() -> Self;

    /// Append ``data`` to the message. Calls may split the message anywhere; only the concatenation counts.
    fn update(&mut self, data: &[u8]);

    /// Pad the message and return its digest. For a [`StreamHasher`] this runs the buffered tail through the
    /// padding state machine, so the trailer covers every byte passed to [`update`](Self::update).
    fn finalize(self) -> Self::Output;

    fn compute(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Push-style front end to a [`MerkleDamgardHash`].
///
/// Full blocks are compressed as soon as they are complete; the buffered tail is handed to the padding state machine
/// on [`Hasher::finalize`], so padding follows exactly the same path as for pulled sources.
pub struct StreamHasher<H: MerkleDamgardHash> {
    hash_state: H::State,
    buffer: [u8; BLOCK_LENGTH_BYTES],
    buffered: usize,
    message_length_bits: u64,
}

impl<H: MerkleDamgardHash> StreamHasher<H> {
    fn compress_buffer(&mut self) {
        let block = ByteBlock::from(self.buffer);
        self.hash_state = H::compress(self.hash_state, &block);
        self.message_length_bits = self
            .message_length_bits
            .wrapping_add(8 * BLOCK_LENGTH_BYTES as u64);
        self.buffered = 0;
    }
}

impl<H: MerkleDamgardHash> Hasher for StreamHasher<H> {
    type Output = H::Output;

    fn new() -> Self {
        StreamHasher {
            hash_state: H::INITIAL,
            buffer: [0_u8; BLOCK_LENGTH_BYTES],
            buffered: 0,
            message_length_bits: 0,
        }
    }

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let n = (BLOCK_LENGTH_BYTES - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + n].copy_from_slice(&data[..n]);
            self.buffered += n;
            data = &data[n..];
            if self.buffered == BLOCK_LENGTH_BYTES {
                self.compress_buffer();
            }
        }
    }

    fn finalize(self) -> Self::Output {
        let tail = &self.buffer[..self.buffered];
        match Digester::<H, _>::resume(tail, self.hash_state, self.message_length_bits).run() {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }
}
