mod any;
mod digest;
mod hasher;
mod hashing_reader;
pub mod merkle_damgard;
mod source;

pub use self::any::*;
pub use self::digest::*;
pub use self::hasher::*;
pub use self::hashing_reader::*;
pub use self::merkle_damgard::md5::Md5;
pub use self::merkle_damgard::sha256::Sha256;
pub use self::merkle_damgard::{Digester, DriverState, MerkleDamgardHash};
pub use self::source::*;

pub type Md5Hasher = StreamHasher<Md5>;
pub type Sha256Hasher = StreamHasher<Sha256>;
pub type Md5Reader<R> = HashingReader<R, Md5Hasher>;
pub type Sha256Reader<R> = HashingReader<R, Sha256Hasher>;
