use std::io::Read;

use byteorder::ByteOrder;

use crate::array_util::ByteBlock;
use crate::hash::{ByteSource, ReaderSource};
use crate::Error;

pub mod md5;
pub mod padding;
pub mod sha256;

use self::padding::BlockPadder;

/// A hash generated from a merkle damgård construction. Hashes that implement that trait get their digest functions
/// implemented automatically by this crate: they only provide the compression of a single block and the
/// serialization of the final state.
pub trait MerkleDamgardHash: Sized {
    /// The running hash state threaded through every compression.
    type State: Copy;

    /// Byte order of the message length appended by the padding.
    type LengthOrder: ByteOrder;

    /// The finished digest.
    type Output;

    const INITIAL: Self::State;

    /// Fold one padded block into the state.
    fn compress(state: Self::State, block: &ByteBlock) -> Self::State;

    /// Serialize a state into its canonical digest.
    fn finalize(state: Self::State) -> Self::Output;

    /// Digest everything the ``source`` yields. Fails only if the source fails.
    fn digest_source<S: ByteSource>(source: S) -> Result<Self::Output, S::Error> {
        Digester::<Self, S>::new(source).run()
    }

    /// Digest everything ``reader`` yields until its end.
    fn digest_reader<R: Read>(reader: R) -> Result<Self::Output, Error> {
        Ok(Self::digest_source(ReaderSource::new(reader))?)
    }

    /// Digest a message that is completely in memory.
    fn digest_message(input: &[u8]) -> Self::Output {
        match Self::digest_source(input) {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }
}

/// Whether a [`Digester`] still has blocks to compress.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Complete,
}

/// Pulls padded blocks out of a byte source and compresses them into a hash state, one block per step.
pub struct Digester<H: MerkleDamgardHash, S> {
    padder: BlockPadder<S, H::LengthOrder>,
    hash_state: H::State,
    driver_state: DriverState,
    blocks_compressed: u64,
}

impl<H: MerkleDamgardHash, S: ByteSource> Digester<H, S> {
    pub fn new(source: S) -> Self {
        Self::resume(source, H::INITIAL, 0)
    }

    /// Continue a digest whose first ``message_length_bits`` bits were already compressed into ``hash_state``.
    /// ``message_length_bits`` must be a multiple of the block length.
    pub fn resume(source: S, hash_state: H::State, message_length_bits: u64) -> Self {
        Digester {
            padder: BlockPadder::resume(source, message_length_bits),
            hash_state,
            driver_state: DriverState::Running,
            blocks_compressed: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.driver_state
    }

    /// Number of blocks compressed by this digester so far, padding blocks included.
    pub fn blocks_compressed(&self) -> u64 {
        self.blocks_compressed
    }

    /// Compress the next block, if there is one.
    pub fn step(&mut self) -> Result<DriverState, S::Error> {
        if self.driver_state == DriverState::Complete {
            return Ok(DriverState::Complete);
        }

        match self.padder.produce_next_block()? {
            Some(block) => {
                self.hash_state = H::compress(self.hash_state, &block);
                self.blocks_compressed += 1;
                log::trace!("compressed block {}", self.blocks_compressed);
            }
            None => {
                log::debug!(
                    "digest complete: {} message bits in {} blocks",
                    self.padder.message_length_bits(),
                    self.blocks_compressed
                );
                self.driver_state = DriverState::Complete;
            }
        }

        Ok(self.driver_state)
    }

    /// Compress all remaining blocks and return the digest.
    pub fn run(mut self) -> Result<H::Output, S::Error> {
        while self.step()? == DriverState::Running {}
        Ok(H::finalize(self.hash_state))
    }
}
