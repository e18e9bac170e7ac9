#![allow(clippy::unreadable_literal)]

use byteorder::{BigEndian, ByteOrder};

use crate::array_util::{ByteBlock, BLOCK_LENGTH_WORDS};
use crate::hash::merkle_damgard::MerkleDamgardHash;
use crate::hash::Sha256Digest;

/// A type for the SHA-256 hash function (FIPS 180-4). It does not carry actual data and exists solely for access to
/// the function.
#[derive(Debug, Copy, Clone)]
pub struct Sha256;

/// The eight working words `a` to `h` of a SHA-256 hash state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sha256State(pub [u32; 8]);

/// first 32 bits of the fractional parts of the square roots of the first 8 primes
pub const INITIAL: Sha256State = Sha256State([
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
]);

/// first 32 bits of the fractional parts of the cube roots of the first 64 primes
#[rustfmt::skip]
static ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const SCHEDULE_LENGTH: usize = 64;

#[inline]
fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block, read as 16 big endian words, into the 64 word message schedule.
fn message_schedule(block: &ByteBlock) -> [u32; SCHEDULE_LENGTH] {
    let mut schedule = [0_u32; SCHEDULE_LENGTH];
    schedule[..BLOCK_LENGTH_WORDS].copy_from_slice(&block.words::<BigEndian>());

    for t in BLOCK_LENGTH_WORDS..SCHEDULE_LENGTH {
        schedule[t] = small_sigma1(schedule[t - 2])
            .wrapping_add(schedule[t - 7])
            .wrapping_add(small_sigma0(schedule[t - 15]))
            .wrapping_add(schedule[t - 16]);
    }

    schedule
}

/// compute one block of SHA-256
pub fn round_function(state: Sha256State, block: &ByteBlock) -> Sha256State {
    let schedule = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

    for (constant, word) in ROUND_CONSTANTS.iter().zip(schedule.iter()) {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(*constant)
            .wrapping_add(*word);
        let temp2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    let mut next = state.0;
    for (word, register) in next.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(register);
    }
    Sha256State(next)
}

impl MerkleDamgardHash for Sha256 {
    type State = Sha256State;
    type LengthOrder = BigEndian;
    type Output = Sha256Digest;

    const INITIAL: Self::State = INITIAL;

    fn compress(state: Self::State, block: &ByteBlock) -> Self::State {
        round_function(state, block)
    }

    /// Serializes the state words in big endian order.
    fn finalize(state: Self::State) -> Self::Output {
        let mut raw = [0_u8; 32];
        BigEndian::write_u32_into(&state.0, &mut raw);
        raw.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{random_messages, sha256_reference, LONG_TEXT, SOME_TEXT, STREAM_TEXT};

    fn sha256_hex(message: &[u8]) -> String {
        Sha256::digest_message(message).to_hex()
    }

    #[test]
    fn test_fips180_examples() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        // 56 bytes: the length trailer spills into a second block
        assert_eq!(
            sha256_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
        assert_eq!(
            sha256_hex(b"The quick brown fox jumps over the lazy dog"),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_one_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(
            sha256_hex(&message),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_sha256() {
        assert_eq!(sha256_hex(SOME_TEXT.as_bytes()), sha256_reference(SOME_TEXT.as_bytes()));
        assert_eq!(sha256_hex(LONG_TEXT.as_bytes()), sha256_reference(LONG_TEXT.as_bytes()));
        let stream = STREAM_TEXT.concat();
        assert_eq!(sha256_hex(stream.as_bytes()), sha256_reference(stream.as_bytes()));
    }

    #[test]
    fn test_schedule_starts_with_big_endian_words() {
        let mut bytes = [0_u8; 64];
        bytes[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        let schedule = message_schedule(&ByteBlock::from(bytes));
        assert_eq!(schedule[0], 0x6162_6380);
        assert!(schedule[1..16].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_agrees_with_reference() {
        random_messages(|message| {
            assert_eq!(sha256_hex(message), sha256_reference(message));
        });
    }
}
