use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use crate::Error;

/// A finished message digest of `N` bytes.
///
/// Displays as lowercase hexadecimal, two digits per byte, most significant nibble first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest<const N: usize>([u8; N]);

pub type Md5Digest = Digest<16>;
pub type Sha256Digest = Digest<32>;

impl<const N: usize> Digest<N> {
    pub const LEN: usize = N;
    pub const HEX_LEN: usize = 2 * N;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.0
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Display for Digest<N> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> Debug for Digest<N> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const N: usize> FromStr for Digest<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN {
            return Err(Error::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        let mut bytes = [0_u8; N];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidHex)?;
        Ok(Self(bytes))
    }
}
