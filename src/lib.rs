//! Streaming MD5 and SHA-256 digests.
//!
//! Both hashes are Merkle-Damgård constructions over 64 byte blocks. A message is pulled from a
//! [`ByteSource`](hash::ByteSource) one block at a time by a padding state machine, and every block is folded into
//! the running state by the algorithm's compression function. The message never has to be in memory as a whole.

#![allow(clippy::needless_return)]

pub mod array_util;
mod error;
pub mod hash;

pub use self::error::Error;
