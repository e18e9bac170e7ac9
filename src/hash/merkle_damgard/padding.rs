use std::marker::PhantomData;

use byteorder::ByteOrder;

use crate::array_util::{ByteBlock, BLOCK_LENGTH_BYTES};
use crate::hash::ByteSource;

/// offset of the 64 bit message length within the last block
const LENGTH_OFFSET: usize = BLOCK_LENGTH_BYTES - 8;

/// index of the message length when the block is viewed as double words
const LENGTH_DOUBLE_WORD: usize = LENGTH_OFFSET / 8;

/// Where the padder stands within the message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaddingState {
    /// Still pulling message bytes from the source.
    Reading,
    /// The terminating `1` bit has been emitted, but the length did not fit behind it. One block consisting of zeros
    /// and the length remains.
    ZeroPad,
    /// All blocks have been emitted.
    Done,
}

/// Turns a byte source into the sequence of padded blocks of a Merkle-Damgård hash.
///
/// The concatenation of all produced blocks is the message, a single `1` bit, as few `0` bits as needed to reach
/// 448 bits modulo 512, and the message length in bits as a 64 bit integer in byte order ``B``.
pub struct BlockPadder<S, B> {
    source: S,
    state: PaddingState,
    message_length_bits: u64,
    _order: PhantomData<B>,
}

impl<S: ByteSource, B: ByteOrder> BlockPadder<S, B> {
    pub fn new(source: S) -> Self {
        Self::resume(source, 0)
    }

    /// Create a padder for the tail of a message whose first ``message_length_bits`` bits have already been
    /// compressed elsewhere. The length trailer will cover the whole message.
    pub fn resume(source: S, message_length_bits: u64) -> Self {
        BlockPadder {
            source,
            state: PaddingState::Reading,
            message_length_bits,
            _order: PhantomData,
        }
    }

    pub fn state(&self) -> PaddingState {
        self.state
    }

    /// Number of message bits consumed so far. Once padding has begun this is the value written into the trailer.
    pub fn message_length_bits(&self) -> u64 {
        self.message_length_bits
    }

    /// Produce the next padded block, or `None` once the trailer has been emitted.
    pub fn produce_next_block(&mut self) -> Result<Option<ByteBlock>, S::Error> {
        let mut block = ByteBlock::zeroed();

        match self.state {
            PaddingState::Done => return Ok(None),
            PaddingState::ZeroPad => {
                block.set_double_word::<B>(LENGTH_DOUBLE_WORD, self.message_length_bits);
                self.transition(PaddingState::Done);
            }
            PaddingState::Reading => {
                let read = self.fill(&mut block)?;
                self.message_length_bits = self
                    .message_length_bits
                    .wrapping_add(8 * read as u64);

                if read == BLOCK_LENGTH_BYTES {
                    // a full block carries no padding, even if it was the last one. The source remembers that it
                    // is exhausted, so the next call reads nothing and emits the padding block.
                    return Ok(Some(block));
                }

                block[read] = 0x80;
                if read < LENGTH_OFFSET {
                    block.zero_fill(read + 1..LENGTH_OFFSET);
                    block.set_double_word::<B>(LENGTH_DOUBLE_WORD, self.message_length_bits);
                    self.transition(PaddingState::Done);
                } else {
                    block.zero_fill(read + 1..BLOCK_LENGTH_BYTES);
                    self.transition(PaddingState::ZeroPad);
                }
            }
        }

        Ok(Some(block))
    }

    /// Fill ``block`` from the source until it is full or the source is exhausted. Returns the byte count.
    fn fill(&mut self, block: &mut ByteBlock) -> Result<usize, S::Error> {
        let mut filled = 0;
        while filled < BLOCK_LENGTH_BYTES {
            let (read, exhausted) = self.source.read_up_to(&mut block[filled..])?;
            filled += read;
            if exhausted {
                break;
            }
        }
        Ok(filled)
    }

    fn transition(&mut self, next: PaddingState) {
        log::debug!(
            "padding {:?} -> {:?} after {} message bits",
            self.state,
            next,
            self.message_length_bits
        );
        self.state = next;
    }
}

impl<S: ByteSource, B: ByteOrder> Iterator for BlockPadder<S, B> {
    type Item = Result<ByteBlock, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next_block().transpose()
    }
}
