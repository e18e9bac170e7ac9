use std::fmt::{Display, Formatter};
use std::io::Read;
use std::str::FromStr;

use crate::hash::{Md5, Md5Digest, MerkleDamgardHash, Sha256, Sha256Digest};
use crate::Error;

/// A hash algorithm chosen at run time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha256,
}

impl Algorithm {
    pub fn digest_reader<R: Read>(self, reader: R) -> Result<AnyDigest, Error> {
        Ok(match self {
            Algorithm::Md5 => Md5::digest_reader(reader)?.into(),
            Algorithm::Sha256 => Sha256::digest_reader(reader)?.into(),
        })
    }

    pub fn digest_message(self, input: &[u8]) -> AnyDigest {
        match self {
            Algorithm::Md5 => Md5::digest_message(input).into(),
            Algorithm::Sha256 => Sha256::digest_message(input).into(),
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => Md5Digest::LEN,
            Algorithm::Sha256 => Sha256Digest::LEN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// The digest of any supported algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyDigest {
    Md5(Md5Digest),
    Sha256(Sha256Digest),
}

#[allow(clippy::len_without_is_empty)]
impl AnyDigest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyDigest::Md5(..) => Algorithm::Md5,
            AnyDigest::Sha256(..) => Algorithm::Sha256,
        }
    }

    pub fn len(&self) -> usize {
        self.algorithm().output_len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AnyDigest::Md5(digest) => digest.as_ref(),
            AnyDigest::Sha256(digest) => digest.as_ref(),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl Display for AnyDigest {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            AnyDigest::Md5(digest) => Display::fmt(digest, f),
            AnyDigest::Sha256(digest) => Display::fmt(digest, f),
        }
    }
}

/// Parses a digest, choosing the algorithm from the length of the hex string.
impl FromStr for AnyDigest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            Md5Digest::HEX_LEN => Ok(Self::Md5(s.parse()?)),
            Sha256Digest::HEX_LEN => Ok(Self::Sha256(s.parse()?)),
            actual => Err(Error::InvalidLength {
                expected: Sha256Digest::HEX_LEN,
                actual,
            }),
        }
    }
}

impl_from!(Md5Digest, Md5);
impl_from!(Sha256Digest, Sha256);

macro_rules! impl_from {
    ($from:ty, $self:ident) => {
        impl From<$from> for AnyDigest {
            fn from(other: $from) -> Self {
                Self::$self(other)
            }
        }
    };
}

use impl_from;
