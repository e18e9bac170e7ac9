#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use byteorder::{ByteOrder, LittleEndian};

use crate::array_util::ByteBlock;
use crate::hash::merkle_damgard::MerkleDamgardHash;
use crate::hash::Md5Digest;

/// A type for the MD5 hash function (RFC 1321). It does not carry actual data and exists solely for access to the
/// function.
#[derive(Debug, Copy, Clone)]
pub struct Md5;

/// A tuple struct containing all four words of an MD5 hash state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Md5State(pub u32, pub u32, pub u32, pub u32);

/// The initial state for any MD5 hash. From here, all blocks are applied.
pub const INITIAL: Md5State = Md5State(0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476);

/// bits rotated per step
#[rustfmt::skip]
static ROUND_ROTATION_COUNT: [u32; 64] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21];

/// binary floored values of |sin(i + 1)| * 2^32 where i is the array index
#[rustfmt::skip]
static MAGIC_SINUS_SCALARS: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391];

#[inline]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// compute one block of MD5
///
/// # Parameters
/// ``state`` the hash state before this block
/// ``block`` one block of padded message data, read as 16 little endian words
///
/// # Returns
/// A new ``Md5State`` computed from the input state and the input data block.
pub fn round_function(state: Md5State, block: &ByteBlock) -> Md5State {
    let input_block = block.words::<LittleEndian>();

    let mut round_state = state;

    for step in 0..64 {
        let Md5State(a, b, c, d) = round_state;
        let (scrambled_data, message_index) = match step {
            0..=15 => (f(b, c, d), step),
            16..=31 => (g(b, c, d), (5 * step + 1) % 16),
            32..=47 => (h(b, c, d), (3 * step + 5) % 16),
            48..=63 => (i(b, c, d), (7 * step) % 16),
            _ => unreachable!(),
        };

        let rotated = a
            .wrapping_add(scrambled_data)
            .wrapping_add(MAGIC_SINUS_SCALARS[step])
            .wrapping_add(input_block[message_index])
            .rotate_left(ROUND_ROTATION_COUNT[step]);

        round_state = Md5State(d, b.wrapping_add(rotated), b, c);
    }

    Md5State(
        state.0.wrapping_add(round_state.0),
        state.1.wrapping_add(round_state.1),
        state.2.wrapping_add(round_state.2),
        state.3.wrapping_add(round_state.3),
    )
}

impl MerkleDamgardHash for Md5 {
    type State = Md5State;
    type LengthOrder = LittleEndian;
    type Output = Md5Digest;

    const INITIAL: Self::State = INITIAL;

    fn compress(state: Self::State, block: &ByteBlock) -> Self::State {
        round_function(state, block)
    }

    /// Serializes the state words in little endian order, lowest word first.
    fn finalize(state: Self::State) -> Self::Output {
        let mut raw = [0_u8; 16];
        LittleEndian::write_u32_into(&[state.0, state.1, state.2, state.3], &mut raw);
        raw.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{md5_reference, random_messages, LONG_TEXT, SOME_TEXT};

    fn md5_hex(message: &[u8]) -> String {
        Md5::digest_message(message).to_hex()
    }

    #[test]
    fn test_rfc1321_suite() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex(b"message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
        assert_eq!(md5_hex(b"abcdefghijklmnopqrstuvwxyz"), "c3fcd3d76192e4007dfb496cca67e13b");
        assert_eq!(
            md5_hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
        assert_eq!(
            md5_hex(b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    #[test]
    fn test_md5() {
        assert_eq!(md5_hex(SOME_TEXT.as_bytes()), md5_reference(SOME_TEXT.as_bytes()));
        assert_eq!(md5_hex(LONG_TEXT.as_bytes()), md5_reference(LONG_TEXT.as_bytes()));
    }

    #[test]
    fn test_round_function_is_pure() {
        let block = ByteBlock::from([0x61; 64]);
        let first = round_function(INITIAL, &block);
        let second = round_function(INITIAL, &block);
        assert_eq!(first, second);
        assert_ne!(first, INITIAL);
    }

    #[test]
    fn test_agrees_with_reference() {
        random_messages(|message| {
            assert_eq!(md5_hex(message), md5_reference(message));
        });
    }
}
